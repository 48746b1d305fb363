/*! Integration tests for Dynamic Layout.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - path: path parsing and formatting
 * - doc: get/set/remove/append/rename on document values
 * - store: the document store and its subscribers
 * - tree: tree and outline projections
 * - form: form dispatch and form edits against a store
 * - text: JSON and YAML text projections
 * - editor: the editor facade end to end
 * - layout: size registry bookkeeping
 * - config: editor configuration
 * - properties: property tests for the document algebra
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dynamic_layout=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod config;
mod doc;
mod editor;
mod layout;
mod properties;
mod store;
mod text;
mod tree;
