use crate::error::GenerateError;
use anyhow::{Result, bail};
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Name of the package metadata file that gets generated.
pub const PACKAGE_INFO_FILE: &str = "package-info.java";

/// Text encoding of generated files.
///
/// Wraps an `encoding_rs` encoding. UTF-16 has no encoder there, so it is
/// written directly; the bare `UTF-16` label means big-endian with a byte
/// order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    encoding: &'static Encoding,
    bom: bool,
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::new(UTF_8)
    }
}

impl TextEncoding {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            bom: false,
        }
    }

    /// Look up a WHATWG label. Labels that cannot be written as requested are rejected.
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("utf-16") || label.eq_ignore_ascii_case("utf16") {
            return Some(Self {
                encoding: UTF_16BE,
                bom: true,
            });
        }
        let encoding = Encoding::for_label(label.as_bytes())?;
        let is_utf16 = encoding == UTF_16BE || encoding == UTF_16LE;
        if !is_utf16 && encoding.output_encoding() != encoding {
            return None;
        }
        Some(Self::new(encoding))
    }

    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Encoded bytes, or `None` when `content` has characters the encoding lacks.
    pub fn encode(&self, content: &str) -> Option<Vec<u8>> {
        if self.encoding == UTF_16BE || self.encoding == UTF_16LE {
            let big_endian = self.encoding == UTF_16BE;
            let units = self
                .bom
                .then_some(0xfeff_u16)
                .into_iter()
                .chain(content.encode_utf16());
            let mut bytes = Vec::with_capacity(content.len() * 2 + 2);
            for unit in units {
                if big_endian {
                    bytes.extend_from_slice(&unit.to_be_bytes());
                } else {
                    bytes.extend_from_slice(&unit.to_le_bytes());
                }
            }
            return Some(bytes);
        }
        let (bytes, _, unmappable) = self.encoding.encode(content);
        if unmappable {
            return None;
        }
        Some(bytes.into_owned())
    }
}

/// Resolve an optional encoding label. `None` selects UTF-8.
pub fn resolve_encoding(label: Option<&str>) -> Result<TextEncoding> {
    let Some(label) = label else {
        return Ok(TextEncoding::default());
    };
    let Some(encoding) = TextEncoding::for_label(label) else {
        bail!("unsupported encoding: {}", label);
    };
    Ok(encoding)
}

/// Header lines, then the package statement and a trailing blank line.
pub fn render(lines: &[String], package: &str) -> String {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content.push_str("package ");
    content.push_str(package);
    content.push_str(";\n");
    content.push('\n');
    content
}

fn ensure_parent_dirs(target: &Path) -> Result<(), GenerateError> {
    let Some(parent) = target.parent() else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|source| GenerateError::DirectoryCreation {
        path: target.to_path_buf(),
        source,
    })
}

/// Write `content` to `target` in `encoding`, replacing any existing file.
pub fn emit(target: &Path, content: &str, encoding: TextEncoding) -> Result<(), GenerateError> {
    let Some(bytes) = encoding.encode(content) else {
        return Err(GenerateError::Unencodable {
            path: target.to_path_buf(),
            encoding: encoding.name(),
        });
    };

    ensure_parent_dirs(target)?;

    let write_err = |source: std::io::Error| GenerateError::FileWrite {
        path: target.to_path_buf(),
        source,
    };
    let file = File::create(target).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;
    use tempfile::TempDir;

    fn utf8() -> TextEncoding {
        TextEncoding::default()
    }

    #[test]
    fn render_places_header_before_package_statement() {
        let lines = vec!["// example".to_string(), "@Deprecated".to_string()];
        assert_eq!(
            render(&lines, "net.example.missing"),
            "// example\n@Deprecated\npackage net.example.missing;\n\n"
        );
    }

    #[test]
    fn render_without_header() {
        assert_eq!(render(&[], "a.b"), "package a.b;\n\n");
    }

    #[test]
    fn emit_creates_missing_parents_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("net/example").join(PACKAGE_INFO_FILE);

        emit(&target, "package old;\n\n", utf8()).unwrap();
        emit(&target, "package net.example;\n\n", utf8()).unwrap();

        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "package net.example;\n\n"
        );
    }

    #[test]
    fn emit_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("net"), "not a directory").unwrap();
        let target = dir.path().join("net/example").join(PACKAGE_INFO_FILE);

        let err = emit(&target, "package net.example;\n\n", utf8()).unwrap_err();
        assert!(matches!(err, GenerateError::DirectoryCreation { .. }), "{err}");
    }

    #[test]
    fn emit_fails_when_target_is_a_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(PACKAGE_INFO_FILE);
        fs::create_dir_all(&target).unwrap();

        let err = emit(&target, "package x;\n\n", utf8()).unwrap_err();
        assert!(matches!(err, GenerateError::FileWrite { .. }), "{err}");
    }

    #[test]
    fn emit_uses_requested_encoding() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(PACKAGE_INFO_FILE);

        emit(&target, "// Grüße\npackage x;\n\n", TextEncoding::new(WINDOWS_1252)).unwrap();

        let bytes = fs::read(&target).unwrap();
        assert_eq!(bytes, b"// Gr\xfc\xdfe\npackage x;\n\n");
    }

    #[test]
    fn emit_rejects_unmappable_content() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(PACKAGE_INFO_FILE);

        let err = emit(&target, "// \u{4e2d}\npackage x;\n\n", TextEncoding::new(WINDOWS_1252)).unwrap_err();
        assert!(matches!(err, GenerateError::Unencodable { .. }), "{err}");
        assert!(!target.exists());
    }

    #[test]
    fn resolve_encoding_defaults_to_utf8() {
        assert_eq!(resolve_encoding(None).unwrap(), utf8());
        assert_eq!(resolve_encoding(Some(" utf-8 ")).unwrap(), utf8());
        assert_eq!(
            resolve_encoding(Some("ISO-8859-1")).unwrap(),
            TextEncoding::new(WINDOWS_1252)
        );
    }

    #[test]
    fn resolve_encoding_rejects_labels_without_encoder() {
        // ISO-2022-KR maps to the decode-only replacement encoding
        let err = resolve_encoding(Some("iso-2022-kr")).unwrap_err();
        assert!(err.to_string().contains("unsupported encoding"));
    }

    #[test]
    fn emit_writes_utf16_as_requested() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(PACKAGE_INFO_FILE);

        emit(&target, "package x;\n", resolve_encoding(Some("UTF-16")).unwrap()).unwrap();
        let mut expected = vec![0xfe, 0xff];
        for unit in "package x;\n".encode_utf16() {
            expected.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(fs::read(&target).unwrap(), expected);

        emit(&target, "package x;\n", resolve_encoding(Some("UTF-16LE")).unwrap()).unwrap();
        let expected: Vec<u8> = "package x;\n"
            .encode_utf16()
            .flat_map(|u| u.to_le_bytes())
            .collect();
        assert_eq!(fs::read(&target).unwrap(), expected);

        emit(&target, "package x;\n", resolve_encoding(Some("utf-16be")).unwrap()).unwrap();
        let expected: Vec<u8> = "package x;\n"
            .encode_utf16()
            .flat_map(|u| u.to_be_bytes())
            .collect();
        assert_eq!(fs::read(&target).unwrap(), expected);
    }

    #[test]
    fn resolve_encoding_rejects_unknown_labels() {
        let err = resolve_encoding(Some("klingon")).unwrap_err();
        assert!(err.to_string().contains("unsupported encoding"));
    }
}
