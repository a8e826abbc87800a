fn main() {
    // Host-target test builds run with --no-default-features, where embuild
    // is absent and no ESP-IDF link args are needed.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
