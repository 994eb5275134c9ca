use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
}

impl Size {
    pub fn label(&self) -> &'static str {
        match self {
            Size::Xs => "Extra Small",
            Size::S => "Small",
            Size::M => "Medium",
            Size::L => "Large",
            Size::Xl => "Extra Large",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::S => "s",
            Size::M => "m",
            Size::L => "l",
            Size::Xl => "xl",
        }
    }
}
