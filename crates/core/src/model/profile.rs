use base64::{Engine, engine::general_purpose};
use std::fmt;
use thiserror::Error;

use crate::model::Program;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("photo upload was empty")]
    EmptyPhoto,
}

/// Academic year of study.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Year {
    First,
    Second,
    Third,
    Fourth,
    Other,
}

impl Year {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Year::First => "1st",
            Year::Second => "2nd",
            Year::Third => "3rd",
            Year::Fourth => "4th",
            Year::Other => "Other",
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An uploaded profile photo, held base64-encoded in memory only.
///
/// The blob is never written to disk; it lives and dies with the session.
#[derive(Clone, PartialEq, Eq)]
pub struct ProfilePhoto {
    encoded: String,
}

impl ProfilePhoto {
    /// Encode raw uploaded bytes.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyPhoto` if the upload carried no bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ProfileError> {
        if data.is_empty() {
            return Err(ProfileError::EmptyPhoto);
        }
        Ok(Self {
            encoded: general_purpose::STANDARD.encode(data),
        })
    }

    #[must_use]
    pub fn as_base64(&self) -> &str {
        &self.encoded
    }
}

// Keep the blob itself out of debug output.
impl fmt::Debug for ProfilePhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfilePhoto")
            .field("encoded_len", &self.encoded.len())
            .finish()
    }
}

/// Student profile fields, replaced wholesale on save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    name: Option<String>,
    program: Option<Program>,
    year: Option<Year>,
    favorite_song: Option<String>,
    favorite_food: Option<String>,
    interests: Option<String>,
    photo: Option<ProfilePhoto>,
}

/// Editable form state for the profile editor.
#[derive(Clone, Debug, Default)]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub program: Option<Program>,
    pub year: Option<Year>,
    pub favorite_song: Option<String>,
    pub favorite_food: Option<String>,
    pub interests: Option<String>,
    pub photo: Option<ProfilePhoto>,
}

impl ProfileDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize the draft into a stored profile.
    ///
    /// Text fields are trimmed; blank fields become unset. There are no
    /// partial updates: saving replaces the previous profile entirely.
    #[must_use]
    pub fn normalized(self) -> Profile {
        Profile {
            name: normalize_optional(self.name),
            program: self.program,
            year: self.year,
            favorite_song: normalize_optional(self.favorite_song),
            favorite_food: normalize_optional(self.favorite_food),
            interests: normalize_optional(self.interests),
            photo: self.photo,
        }
    }
}

impl Profile {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn program(&self) -> Option<Program> {
        self.program
    }

    #[must_use]
    pub fn year(&self) -> Option<Year> {
        self.year
    }

    #[must_use]
    pub fn favorite_song(&self) -> Option<&str> {
        self.favorite_song.as_deref()
    }

    #[must_use]
    pub fn favorite_food(&self) -> Option<&str> {
        self.favorite_food.as_deref()
    }

    #[must_use]
    pub fn interests(&self) -> Option<&str> {
        self.interests.as_deref()
    }

    #[must_use]
    pub fn photo(&self) -> Option<&ProfilePhoto> {
        self.photo.as_ref()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
