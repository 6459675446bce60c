fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_moedict.toml",
        include_str!("src/default_moedict.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Table>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
