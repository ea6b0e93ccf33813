// File: crates/interact-skia/build.rs
// Summary: Links the Windows system libraries Skia's ICU/font code expects.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // registry lookups (RegOpenKeyExW, RegQueryInfoKeyW)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
