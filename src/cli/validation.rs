// validation.rs - Input validation utilities

use std::path::{Path, PathBuf};

/// Validate that the input path exists and is a regular file
pub fn validate_input(path: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(path);
    if !path_buf.exists() {
        return Err(format!("Input file not found: {}", path));
    }
    if !path_buf.is_file() {
        return Err(format!("Input path is not a file: {}", path));
    }
    Ok(path_buf)
}

/// Check whether a FASTA path carries a conventional extension.
/// Advisory only; unusual extensions are still accepted.
pub fn has_fasta_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()).unwrap_or(""),
        "fasta" | "fa" | "fas" | "fna"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_rejected() {
        let err = validate_input("/no/such/input.fasta").unwrap_err();
        assert!(err.contains("Input file not found"));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_input(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("not a file"));
    }

    #[test]
    fn test_existing_file_is_accepted() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = validate_input(file.path().to_str().unwrap()).unwrap();
        assert_eq!(path, file.path());
    }

    #[test]
    fn test_fasta_extensions() {
        assert!(has_fasta_extension(Path::new("aln.fasta")));
        assert!(has_fasta_extension(Path::new("aln.fna")));
        assert!(!has_fasta_extension(Path::new("aln.txt")));
        assert!(!has_fasta_extension(Path::new("aln")));
    }
}
