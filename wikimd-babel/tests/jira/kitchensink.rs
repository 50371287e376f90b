//! Whole-document conversion of a fixture that exercises every construct together

use insta::assert_snapshot;
use std::path::PathBuf;
use wikimd_babel::convert;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("jira")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn test_kitchensink() {
    let markdown = convert(&fixture("kitchensink.jira")).expect("kitchensink to convert");

    assert_snapshot!(markdown, @r###"
    # Release notes

    Welcome to the **new** release. It brings *faster* builds and `cargo` support.

    ## Highlights

    * Parser rewrite
      * Handles **nested** lists
        * Even deeper
    * See [the changelog](https://example.com/changes)

    1. Download
    1. Install
       1. Run the installer
    1. Enjoy

    > Ship early, ship often.

    Deprecated APIs
    are removed in this version.

    Formula: E=mc<sup>2</sup> and H<sub>2</sub>O, a <ins>new</ins> flag, and an x ~~old~~ y.

    ```rust
    fn main() {
        println!("*not bold*");
    }
    ```

    ```
    _raw_ text
    ```

    ![](https://example.com/logo.png) [![](https://example.com/badge.svg)](https://example.com/ci) <https://example.com>
    "###);
}

#[test]
fn test_kitchensink_is_stable_across_calls() {
    let source = fixture("kitchensink.jira");
    assert_eq!(convert(&source).unwrap(), convert(&source).unwrap());
}
