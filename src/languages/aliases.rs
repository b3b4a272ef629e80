//! Import name → published package name corrections.
//!
//! Only entries where the two differ are listed; everything else falls
//! through to the import name folded to the registry's convention.

use super::Language;

const PYTHON_ALIASES: &[(&str, &str)] = &[
    ("Crypto", "pycryptodome"),
    ("MySQLdb", "mysqlclient"),
    ("OpenGL", "PyOpenGL"),
    ("OpenSSL", "pyOpenSSL"),
    ("PIL", "Pillow"),
    ("attr", "attrs"),
    ("bs4", "beautifulsoup4"),
    ("cv2", "opencv-python"),
    ("dateutil", "python-dateutil"),
    ("docx", "python-docx"),
    ("dotenv", "python-dotenv"),
    ("gi", "PyGObject"),
    ("jwt", "PyJWT"),
    ("opencv", "opencv-python"),
    ("pyaudio", "PyAudio"),
    ("serial", "pyserial"),
    ("skimage", "scikit-image"),
    ("sklearn", "scikit-learn"),
    ("wx", "wxPython"),
    ("yaml", "PyYAML"),
];

const JAVASCRIPT_ALIASES: &[(&str, &str)] = &[
    ("angular", "@angular/core"),
    ("apollo", "apollo-client"),
    ("babel", "@babel/core"),
    ("material-ui", "@mui/material"),
    ("solid", "solid-js"),
];

fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Python => PYTHON_ALIASES,
        Language::JavaScript => JAVASCRIPT_ALIASES,
        Language::Java | Language::CSharp => &[],
    }
}

/// Map an import identifier to the name it is published under.
///
/// Lookup is exact and case-sensitive. A miss is the normal case: the
/// identifier is used as-is, lowercased when the language has a registry.
pub fn resolve_name(identifier: &str, language: Language) -> String {
    if let Some((_, canonical)) = table(language).iter().find(|(alias, _)| *alias == identifier) {
        return (*canonical).to_string();
    }

    match language.registry() {
        Some(registry) => registry.fold_name(identifier),
        None => identifier.to_string(),
    }
}
