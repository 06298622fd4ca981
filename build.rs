use std::env;

const DEFAULT_SYSCLK_HZ: &str = "48000000";

fn main() {
    println!("cargo:rerun-if-env-changed=TSC_SYSCLK_HZ");
    println!("cargo:rerun-if-env-changed=TSC_SYSTICK_HZ");

    // Core clock frequency
    let sysclk = env::var("TSC_SYSCLK_HZ").unwrap_or_else(|_| DEFAULT_SYSCLK_HZ.to_string());
    println!("cargo:rustc-env=TSC_SYSCLK_HZ={}", sysclk);

    // Counter clock, defaults to the core clock
    if let Ok(systick) = env::var("TSC_SYSTICK_HZ") {
        println!("cargo:rustc-env=TSC_SYSTICK_HZ={}", systick);
        println!("cargo:warning=Using TSC_SYSTICK_HZ from environment: {}", systick);
    } else {
        println!("cargo:rustc-env=TSC_SYSTICK_HZ={}", sysclk);
    }
}
