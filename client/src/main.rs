//! Trunk entry point.

fn main() {
    #[cfg(feature = "csr")]
    client::mount();
}
