use log::info;
use std::fs;
use std::path::Path;

pub mod date;

pub fn ensure_static_dir(static_dir: &str) -> std::io::Result<()> {
    let dir = Path::new(static_dir);
    if !dir.exists() {
        info!("Creating static directory {}...", static_dir);
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_static_dir() {
        let dir = std::env::temp_dir().join(format!("about-site-static-{}", std::process::id()));
        fs::remove_dir_all(&dir).ok();
        let dir_str = dir.to_str().unwrap();

        ensure_static_dir(dir_str).unwrap();
        assert!(dir.is_dir());

        // already there, still fine
        ensure_static_dir(dir_str).unwrap();
        fs::remove_dir_all(&dir).ok();
    }
}
