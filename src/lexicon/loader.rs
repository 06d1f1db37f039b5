//! Lexicon loading utilities
//!
//! Provides functions to load a lexicon from a file or use the embedded list.

use super::Lexicon;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Load a lexicon from a file with one word per line
///
/// Blank lines and entries with non-letter characters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_popper::lexicon::loader::load_from_file;
///
/// let lexicon = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Lexicon> {
    let content = fs::read_to_string(path.as_ref())?;
    let lexicon = Lexicon::from_words(content.lines());
    info!(
        "loaded {} words from {}",
        lexicon.len(),
        path.as_ref().display()
    );
    Ok(lexicon)
}

/// Pick a lexicon by name: `"all"` for the embedded list, otherwise a file path
///
/// # Errors
///
/// Returns an I/O error if a path is given and cannot be read.
pub fn load_named(name: &str) -> io::Result<Lexicon> {
    match name {
        "all" | "embedded" => {
            let lexicon = Lexicon::embedded();
            info!("using embedded lexicon ({} words)", lexicon.len());
            Ok(lexicon)
        }
        path => load_from_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file_skips_junk() {
        let path = std::env::temp_dir().join(format!("word_popper_lexicon_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "cat\n\n  Dog\nx1y\nbird").unwrap();
        }

        let lexicon = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("dog"));
        assert!(!lexicon.contains("x1y"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn named_all_is_embedded() {
        let lexicon = load_named("all").unwrap();
        assert!(lexicon.contains("cat"));
    }
}
