use std::env;

fn main() {
    // RapidAPI キーをビルド時に埋め込む (option_env!("RAPIDAPI_KEY") で参照)
    match env::var("RAPIDAPI_KEY") {
        Ok(key) if !key.is_empty() => {
            println!("cargo:rustc-env=RAPIDAPI_KEY={}", key);
        }
        _ => {
            println!("cargo:warning=RAPIDAPI_KEY is not set; job API requests will be rejected upstream");
        }
    }

    // キー変更時に再ビルド
    println!("cargo:rerun-if-env-changed=RAPIDAPI_KEY");
}
