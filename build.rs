fn main() {
    // ESP-IDF sysenv propagation only matters for flash builds; host
    // builds (tests, simulation) skip it.
    if std::env::var("CARGO_FEATURE_ESPIDF").is_ok() {
        embuild::espidf::sysenv::output();
    }
}
