extern crate proc_macro;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Expr, ItemFn};

/// Wraps a test function in temporary-project setup and teardown.
///
/// The annotated function receives a `&TemporaryProject` that is created
/// before the body runs and removed afterwards. An optional `layout`
/// argument (a string literal or a `const` holding one) is scaffolded into
/// the project before the body runs.
///
/// # Example
///
/// ```rust,ignore
/// use testbed_test_macro::testbed_test;
///
/// #[testbed_test(layout = r#"---
/// - !file
///     name: test.txt
///     seed: !text "Hello, world!"
/// "#)]
/// fn file_creation(project: &fs_testbed::TemporaryProject) -> std::io::Result<()> {
///     let content = std::fs::read_to_string(project.abspath("test.txt"))?;
///     assert_eq!(content, "Hello, world!");
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn testbed_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    // Parse the input function
    let input_fn = parse_macro_input!(item as ItemFn);
    let fn_name = &input_fn.sig.ident;
    let inputs = &input_fn.sig.inputs;
    let output = &input_fn.sig.output;
    let fn_block = &input_fn.block;

    // Parse the attribute arguments. The layout value is kept as an
    // expression so both literals and named constants are accepted.
    let mut layout: Option<Expr> = None;
    let attr_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("layout") {
            layout = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported attribute"))
        }
    });
    parse_macro_input!(attr with attr_parser);

    let scaffold: TokenStream2 = match &layout {
        Some(expr) => quote! {
            project
                .scaffold(#expr)
                .expect("failed to scaffold the layout");
        },
        None => TokenStream2::new(),
    };

    // Generate the test function
    let expanded = quote! {
        #[test]
        fn #fn_name() {
            use fs_testbed::TemporaryProject;

            let project = TemporaryProject::new()
                .expect("failed to create the temporary project");
            #scaffold

            let test_body = |#inputs| #output #fn_block;
            if let Err(error) = test_body(&project) {
                panic!("testbed test failed: {}", error);
            }
        }
    };

    TokenStream::from(expanded)
}
