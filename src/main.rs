fn main() {
    #[cfg(feature = "csr")]
    photo_puzzle::mount();
}
