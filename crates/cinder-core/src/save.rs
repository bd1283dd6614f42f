//! Flat-text save record codec.
//!
//! Field order is fixed: `kills nHostiles nProjectiles`, camera position
//! (3), camera angles (2), then `nHostiles` position triples and
//! `nProjectiles` (position, forward) sextuples, all whitespace
//! separated. No magic number, no version field. Decoding validates the
//! field count against the header before anything is accepted.

use std::fmt;

use glam::Vec3;

/// Header + camera fields preceding the flattened entity payload.
const FIXED_FIELDS: usize = 8;

/// The persisted form of the full dynamic state.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRecord {
    pub kills: u32,
    pub camera_position: Vec3,
    /// (yaw, pitch) in radians.
    pub camera_angles: (f32, f32),
    /// Hostile positions, in sequence order.
    pub hostiles: Vec<Vec3>,
    /// Projectile (position, forward) pairs, in sequence order.
    pub projectiles: Vec<(Vec3, Vec3)>,
}

impl SaveRecord {
    /// Encode to the flat text format.
    pub fn to_text(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} {}",
            self.kills,
            self.hostiles.len(),
            self.projectiles.len()
        );
        let p = self.camera_position;
        let _ = writeln!(out, "{} {} {}", p.x, p.y, p.z);
        let _ = writeln!(out, "{} {}", self.camera_angles.0, self.camera_angles.1);
        for h in &self.hostiles {
            let _ = writeln!(out, "{} {} {}", h.x, h.y, h.z);
        }
        for (pos, fwd) in &self.projectiles {
            let _ = writeln!(
                out,
                "{} {} {} {} {} {}",
                pos.x, pos.y, pos.z, fwd.x, fwd.y, fwd.z
            );
        }
        out
    }

    /// Decode from the flat text format.
    ///
    /// The token stream must match the header counts exactly; a short or
    /// long stream is a [`LoadError::CountMismatch`], a non-numeric
    /// token a [`LoadError::Parse`].
    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        let tokens: Vec<&str> = text.split_ascii_whitespace().collect();
        if tokens.len() < FIXED_FIELDS {
            return Err(LoadError::CountMismatch {
                what: "save header",
                expected: FIXED_FIELDS,
                found: tokens.len(),
            });
        }

        let kills = parse_u32(tokens[0], "kill count")?;
        let n_hostiles = parse_usize(tokens[1], "hostile count")?;
        let n_projectiles = parse_usize(tokens[2], "projectile count")?;

        let expected = FIXED_FIELDS
            .saturating_add(n_hostiles.saturating_mul(3))
            .saturating_add(n_projectiles.saturating_mul(6));
        if tokens.len() != expected {
            return Err(LoadError::CountMismatch {
                what: "save record",
                expected,
                found: tokens.len(),
            });
        }

        let camera_position = parse_vec3(&tokens[3..6], "camera position")?;
        let camera_angles = (
            parse_f32(tokens[6], "camera angle")?,
            parse_f32(tokens[7], "camera angle")?,
        );

        let mut cursor = FIXED_FIELDS;
        let mut hostiles = Vec::with_capacity(n_hostiles);
        for _ in 0..n_hostiles {
            hostiles.push(parse_vec3(&tokens[cursor..cursor + 3], "hostile position")?);
            cursor += 3;
        }

        let mut projectiles = Vec::with_capacity(n_projectiles);
        for _ in 0..n_projectiles {
            let pos = parse_vec3(&tokens[cursor..cursor + 3], "projectile position")?;
            let fwd = parse_vec3(&tokens[cursor + 3..cursor + 6], "projectile direction")?;
            projectiles.push((pos, fwd));
            cursor += 6;
        }

        Ok(Self {
            kills,
            camera_position,
            camera_angles,
            hostiles,
            projectiles,
        })
    }
}

/// Why a save file could not be loaded. All variants are recoverable:
/// the in-memory state is untouched when a load fails.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(std::io::Error),
    /// A token did not parse as the expected numeric type.
    Parse { field: &'static str, token: String },
    /// The token stream does not match the counts the header declares.
    CountMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read save file: {err}"),
            LoadError::Parse { field, token } => {
                write!(f, "corrupt save: bad {field} value '{token}'")
            }
            LoadError::CountMismatch {
                what,
                expected,
                found,
            } => {
                write!(
                    f,
                    "corrupt save: {what} expects {expected} fields, found {found}"
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

fn parse_f32(token: &str, field: &'static str) -> Result<f32, LoadError> {
    token.parse().map_err(|_| LoadError::Parse {
        field,
        token: token.to_string(),
    })
}

fn parse_u32(token: &str, field: &'static str) -> Result<u32, LoadError> {
    token.parse().map_err(|_| LoadError::Parse {
        field,
        token: token.to_string(),
    })
}

fn parse_usize(token: &str, field: &'static str) -> Result<usize, LoadError> {
    token.parse().map_err(|_| LoadError::Parse {
        field,
        token: token.to_string(),
    })
}

fn parse_vec3(tokens: &[&str], field: &'static str) -> Result<Vec3, LoadError> {
    Ok(Vec3::new(
        parse_f32(tokens[0], field)?,
        parse_f32(tokens[1], field)?,
        parse_f32(tokens[2], field)?,
    ))
}
