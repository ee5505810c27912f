use crate::error::{CodeKind, DecodeError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferentialAction {
    NoAction,
    Restrict,
    Cascade,
    SetNull,
    SetDefault,
}

impl ReferentialAction {
    pub fn from_code(code: u32) -> Result<Self, DecodeError> {
        match code {
            1 => Ok(ReferentialAction::NoAction),
            2 => Ok(ReferentialAction::Restrict),
            3 => Ok(ReferentialAction::Cascade),
            4 => Ok(ReferentialAction::SetNull),
            5 => Ok(ReferentialAction::SetDefault),
            other => Err(DecodeError::unknown_code(CodeKind::ReferentialAction, other)),
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeyConstraint {
    pub name: String,
    pub local_columns: Vec<String>,
    /// Set only when the parent table lives in another database.
    pub referenced_schema: Option<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
    pub on_delete: ReferentialAction,
    pub on_update: ReferentialAction,
}
