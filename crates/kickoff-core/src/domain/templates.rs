//! Fixed text of the generated starter files.

use crate::domain::entities::project::ProjectDescriptor;

pub const LICENSE_LINES: &[&str] = &[
    "MIT License",
    "",
    "Copyright (c) 2020 danschultequb",
    "",
    "Permission is hereby granted, free of charge, to any person obtaining a copy",
    "of this software and associated documentation files (the \"Software\"), to deal",
    "in the Software without restriction, including without limitation the rights",
    "to use, copy, modify, merge, publish, distribute, sublicense, and/or sell",
    "copies of the Software, and to permit persons to whom the Software is",
    "furnished to do so, subject to the following conditions:",
    "",
    "The above copyright notice and this permission notice shall be included in all",
    "copies or substantial portions of the Software.",
    "",
    "THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR",
    "IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,",
    "FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE",
    "AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER",
    "LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,",
    "OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE",
    "SOFTWARE.",
];

pub const GITIGNORE_LINES: &[&str] = &[".idea", "out", "outputs", "target"];

/// `# publisher/project`, newline terminated.
pub fn readme(descriptor: &ProjectDescriptor) -> String {
    format!("# {}\n", descriptor.signature().without_version())
}

pub fn license(_descriptor: &ProjectDescriptor) -> String {
    LICENSE_LINES.join("\n")
}

pub fn gitignore(_descriptor: &ProjectDescriptor) -> String {
    GITIGNORE_LINES.join("\n")
}
