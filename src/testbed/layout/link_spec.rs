use serde::{Deserialize, Serialize};

/// A symbolic link to create inside the sandbox.
///
/// The target is interpreted relative to the directory holding the link,
/// exactly as the operating system would.
///
/// ## yaml
///
/// ```yaml
/// - !link
///     name: latest.txt
///     target: releases/v2.txt
/// ```
///
/// ## json
///
/// ```json
/// {"link": {"name": "latest.txt", "target": "releases/v2.txt"}}
/// ```
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct LinkSpec {
    pub name: String,
    pub target: String,
}
