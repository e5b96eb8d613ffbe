//! Expression container state
//!
//! An expression has a name and, once the user picks one, a logic type
//! that decides which editing strategy applies. The picker and dropdown
//! are host surfaces; only the selection state lives here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Editing strategy tag for a boxed expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicType {
    Undefined,
    LiteralExpression,
    Context,
    DecisionTable,
    Relation,
    FunctionDefinition,
    Invocation,
    List,
}

impl LogicType {
    /// The types a user may pick; `Undefined` is the unselected state,
    /// never an option in the list.
    pub fn selectable() -> Vec<LogicType> {
        vec![
            LogicType::LiteralExpression,
            LogicType::Context,
            LogicType::DecisionTable,
            LogicType::Relation,
            LogicType::FunctionDefinition,
            LogicType::Invocation,
            LogicType::List,
        ]
    }
}

impl fmt::Display for LogicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogicType::Undefined => "<Undefined>",
            LogicType::LiteralExpression => "Literal expression",
            LogicType::Context => "Context",
            LogicType::DecisionTable => "Decision Table",
            LogicType::Relation => "Relation",
            LogicType::FunctionDefinition => "Function",
            LogicType::Invocation => "Invocation",
            LogicType::List => "List",
        };
        write!(f, "{}", label)
    }
}

/// Selection state of one expression container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionState {
    pub name: String,
    logic_type: Option<LogicType>,
}

impl ExpressionState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logic_type: None,
        }
    }

    pub fn with_logic_type(mut self, logic_type: LogicType) -> Self {
        self.logic_type = Some(logic_type);
        self
    }

    pub fn select(&mut self, logic_type: LogicType) {
        self.logic_type = Some(logic_type);
    }

    /// Reset to the unselected state. Hosts disable the action while
    /// nothing is selected (`can_clear`).
    pub fn clear(&mut self) {
        self.logic_type = None;
    }

    pub fn can_clear(&self) -> bool {
        self.logic_type.is_some()
    }

    pub fn is_selected(&self) -> bool {
        self.logic_type.is_some()
    }

    pub fn logic_type(&self) -> Option<LogicType> {
        self.logic_type
    }

    /// What the container displays: the selection, or `Undefined`
    pub fn effective_logic_type(&self) -> LogicType {
        self.logic_type.unwrap_or(LogicType::Undefined)
    }
}
