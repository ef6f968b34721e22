use crate::shared::error::AuditError;
use crate::shared::Result;
use base64::Engine as _;

use super::Repository;

/// Path of the generated file, relative to the repository root
pub const LICENSE_PATH: &str = "LICENSE";

/// Commit message used for every license upload
pub const COMMIT_MESSAGE: &str = "Add MIT License";

/// LicenseFile value object holding the rendered MIT license text
///
/// The text is the standard MIT template with only the copyright line
/// parameterized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseFile {
    text: String,
}

impl LicenseFile {
    /// Renders the MIT license for `year` and `holder`
    pub fn mit(year: i32, holder: &str) -> Result<Self> {
        if holder.trim().is_empty() {
            return Err(AuditError::Validation {
                message: "copyright holder cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            text: render_mit(year, holder),
        })
    }

    /// Renders the MIT license for a repository, using its owner's login
    /// as the copyright holder
    pub fn mit_for(repository: &Repository, year: i32) -> Result<Self> {
        Self::mit(year, repository.owner_login())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Standard base64 (padded) of the exact text bytes
    pub fn encoded_content(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.text.as_bytes())
    }

    /// Builds the create-file request that commits this license to the
    /// repository's target branch
    pub fn commit_for(&self, repository: &Repository) -> FileCommit {
        FileCommit {
            path: LICENSE_PATH.to_string(),
            message: COMMIT_MESSAGE.to_string(),
            content: self.encoded_content(),
            branch: repository.target_branch().to_string(),
        }
    }
}

/// A single-file commit as accepted by the platform's contents API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCommit {
    pub path: String,
    pub message: String,
    /// Base64-encoded file content
    pub content: String,
    pub branch: String,
}

fn render_mit(year: i32, holder: &str) -> String {
    format!(
        r#"MIT License

Copyright (c) {year} {holder}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#
    )
}
