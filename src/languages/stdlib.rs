//! Standard-library name sets.
//!
//! Python names are `sys.stdlib_module_names | sys.builtin_module_names` from
//! CPython 3.11, minus private (`_`-prefixed) modules which are matched by
//! prefix instead. Node names are the core modules of Node.js 20.

use super::Language;

#[rustfmt::skip]
const PYTHON_STDLIB: &[&str] = &[
    "abc", "aifc", "antigravity", "argparse", "array", "ast", "asynchat", "asyncio", "asyncore",
    "atexit", "audioop", "base64", "bdb", "binascii", "bisect", "builtins", "bz2", "cProfile",
    "calendar", "cgi", "cgitb", "chunk", "cmath", "cmd", "code", "codecs", "codeop",
    "collections", "colorsys", "compileall", "concurrent", "configparser", "contextlib",
    "contextvars", "copy", "copyreg", "crypt", "csv", "ctypes", "curses", "dataclasses",
    "datetime", "dbm", "decimal", "difflib", "dis", "distutils", "doctest", "email", "encodings",
    "ensurepip", "enum", "errno", "faulthandler", "fcntl", "filecmp", "fileinput", "fnmatch",
    "fractions", "ftplib", "functools", "gc", "genericpath", "getopt", "getpass", "gettext",
    "glob", "graphlib", "grp", "gzip", "hashlib", "heapq", "hmac", "html", "http", "idlelib",
    "imaplib", "imghdr", "imp", "importlib", "inspect", "io", "ipaddress", "itertools", "json",
    "keyword", "lib2to3", "linecache", "locale", "logging", "lzma", "mailbox", "mailcap",
    "marshal", "math", "mimetypes", "mmap", "modulefinder", "msilib", "msvcrt",
    "multiprocessing", "netrc", "nis", "nntplib", "nt", "ntpath", "nturl2path", "numbers",
    "opcode", "operator", "optparse", "os", "ossaudiodev", "pathlib", "pdb", "pickle",
    "pickletools", "pipes", "pkgutil", "platform", "plistlib", "poplib", "posix", "posixpath",
    "pprint", "profile", "pstats", "pty", "pwd", "py_compile", "pyclbr", "pydoc", "pydoc_data",
    "pyexpat", "queue", "quopri", "random", "re", "readline", "reprlib", "resource",
    "rlcompleter", "runpy", "sched", "secrets", "select", "selectors", "shelve", "shlex",
    "shutil", "signal", "site", "smtpd", "smtplib", "sndhdr", "socket", "socketserver", "spwd",
    "sqlite3", "sre_compile", "sre_constants", "sre_parse", "ssl", "stat", "statistics",
    "string", "stringprep", "struct", "subprocess", "sunau", "symtable", "sys", "sysconfig",
    "syslog", "tabnanny", "tarfile", "telnetlib", "tempfile", "termios", "textwrap", "this",
    "threading", "time", "timeit", "tkinter", "token", "tokenize", "tomllib", "trace",
    "traceback", "tracemalloc", "tty", "turtle", "turtledemo", "types", "typing",
    "unicodedata", "unittest", "urllib", "uu", "uuid", "venv", "warnings", "wave", "weakref",
    "webbrowser", "winreg", "winsound", "wsgiref", "xdrlib", "xml", "xmlrpc", "xxsubtype",
    "zipapp", "zipfile", "zipimport", "zlib", "zoneinfo",
];

// Shipped with the interpreter or its installer, never listed as requirements.
const PYTHON_TOOLING: &[&str] = &["test", "setuptools", "pip"];

#[rustfmt::skip]
const NODE_CORE: &[&str] = &[
    "assert", "async_hooks", "buffer", "child_process", "cluster", "console", "constants",
    "crypto", "dgram", "diagnostics_channel", "dns", "domain", "events", "fs", "http", "http2",
    "https", "inspector", "module", "net", "os", "path", "perf_hooks", "process", "punycode",
    "querystring", "readline", "repl", "stream", "string_decoder", "sys", "timers", "tls",
    "trace_events", "tty", "url", "util", "v8", "vm", "wasi", "worker_threads", "zlib",
];

const JAVA_ROOTS: &[&str] = &["java", "javax", "jdk", "sun"];

const DOTNET_ROOTS: &[&str] = &["System", "Microsoft"];

/// Whether `root` names a standard-library module for `language`.
pub fn is_stdlib(language: Language, root: &str) -> bool {
    match language {
        Language::Python => {
            root.starts_with('_') || PYTHON_STDLIB.contains(&root) || PYTHON_TOOLING.contains(&root)
        }
        Language::JavaScript => root.starts_with("node:") || NODE_CORE.contains(&root),
        Language::Java => JAVA_ROOTS.contains(&root),
        Language::CSharp => DOTNET_ROOTS.contains(&root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_stdlib() {
        assert!(is_stdlib(Language::Python, "os"));
        assert!(is_stdlib(Language::Python, "sys"));
        assert!(is_stdlib(Language::Python, "typing"));
        assert!(is_stdlib(Language::Python, "_thread"));
        assert!(is_stdlib(Language::Python, "setuptools"));
        assert!(!is_stdlib(Language::Python, "requests"));
        assert!(!is_stdlib(Language::Python, "numpy"));
        // Case-sensitive: module names are exact.
        assert!(!is_stdlib(Language::Python, "OS"));
    }

    #[test]
    fn test_node_core() {
        assert!(is_stdlib(Language::JavaScript, "fs"));
        assert!(is_stdlib(Language::JavaScript, "child_process"));
        assert!(is_stdlib(Language::JavaScript, "node:fs"));
        assert!(!is_stdlib(Language::JavaScript, "lodash"));
        assert!(!is_stdlib(Language::JavaScript, "react"));
    }

    #[test]
    fn test_java_and_dotnet_roots() {
        assert!(is_stdlib(Language::Java, "java"));
        assert!(is_stdlib(Language::Java, "javax"));
        assert!(!is_stdlib(Language::Java, "org"));

        assert!(is_stdlib(Language::CSharp, "System"));
        assert!(is_stdlib(Language::CSharp, "Microsoft"));
        assert!(!is_stdlib(Language::CSharp, "Newtonsoft"));
    }
}
