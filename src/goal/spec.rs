//! This module contains [`GoalSpec`], the user-facing description of a target
//! condition for exploration.

use std::{collections::BTreeSet, rc::Rc};

use derivative::Derivative;
use serde_json::Value;

use crate::{
    error::goal::{Error, Result},
    project::Address,
    state::State,
};

/// An arbitrary condition over a [`State`].
pub type Predicate = Rc<dyn Fn(&State) -> bool>;

/// A description of the states that a goal targets.
#[derive(Clone, Default, Derivative)]
#[derivative(Debug)]
pub enum GoalSpec {
    /// No condition was given.
    ///
    /// Whether this matches is decided by the default provided at compile
    /// time.
    #[default]
    None,

    /// A single program address.
    Address(Address),

    /// A collection of program addresses.
    Addresses(BTreeSet<Address>),

    /// An arbitrary predicate over states.
    Predicate(#[derivative(Debug = "ignore")] Predicate),
}

impl GoalSpec {
    /// Constructs a goal that is satisfied whenever `predicate` holds.
    pub fn predicate(predicate: impl Fn(&State) -> bool + 'static) -> Self {
        Self::Predicate(Rc::new(predicate))
    }

    /// Checks if the goal specification is [`GoalSpec::None`].
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<Address> for GoalSpec {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}

impl From<BTreeSet<Address>> for GoalSpec {
    fn from(value: BTreeSet<Address>) -> Self {
        Self::Addresses(value)
    }
}

impl From<Vec<Address>> for GoalSpec {
    fn from(value: Vec<Address>) -> Self {
        Self::Addresses(value.into_iter().collect())
    }
}

impl From<&[Address]> for GoalSpec {
    fn from(value: &[Address]) -> Self {
        Self::Addresses(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[Address; N]> for GoalSpec {
    fn from(value: [Address; N]) -> Self {
        Self::Addresses(value.into_iter().collect())
    }
}

/// Goals commonly arrive as loosely-typed arguments. The accepted forms are
/// `null`, an address, or an array of addresses, where an address is either
/// an unsigned integer or a string holding a decimal or `0x`-prefixed
/// hexadecimal number.
impl TryFrom<&Value> for GoalSpec {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::None),
            Value::Number(_) | Value::String(_) => parse_address(value).map(Self::Address),
            Value::Array(items) => items
                .iter()
                .map(parse_address)
                .collect::<Result<BTreeSet<_>>>()
                .map(Self::Addresses),
            Value::Bool(_) | Value::Object(_) => Err(Error::InvalidGoalSpecification {
                kind: value_kind(value).to_string(),
            }),
        }
    }
}

/// Parses a single address out of `value`.
fn parse_address(value: &Value) -> Result<Address> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .ok_or_else(|| Error::InvalidAddress(number.to_string())),
        Value::String(string) => {
            let parsed = match string.strip_prefix("0x") {
                Some(hex) => Address::from_str_radix(hex, 16),
                None => string.parse(),
            };
            parsed.map_err(|_| Error::InvalidAddress(string.clone()))
        }
        other => Err(Error::InvalidGoalSpecification {
            kind: format!("array of {}", value_kind(other)),
        }),
    }
}

/// Names the kind of a JSON `value` for error reporting.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use serde_json::json;

    use crate::{error::goal::Error, goal::spec::GoalSpec};

    #[test]
    fn converts_addresses_from_json() -> anyhow::Result<()> {
        let single = GoalSpec::try_from(&json!(4096))?;
        assert!(matches!(single, GoalSpec::Address(0x1000)));

        let hex = GoalSpec::try_from(&json!("0x1004"))?;
        assert!(matches!(hex, GoalSpec::Address(0x1004)));

        let GoalSpec::Addresses(many) = GoalSpec::try_from(&json!([16, "0x14", "24"]))? else {
            panic!("Expected a collection of addresses");
        };
        assert_eq!(many, BTreeSet::from([0x10, 0x14, 0x18]));

        assert!(GoalSpec::try_from(&json!(null))?.is_none());

        Ok(())
    }

    #[test]
    fn rejects_unrecognised_goal_kinds() {
        let object = GoalSpec::try_from(&json!({ "addr": 16 })).unwrap_err();
        assert_eq!(
            object,
            Error::InvalidGoalSpecification {
                kind: "object".into(),
            }
        );

        let boolean = GoalSpec::try_from(&json!(true)).unwrap_err();
        assert_eq!(
            boolean,
            Error::InvalidGoalSpecification {
                kind: "boolean".into(),
            }
        );

        let nested = GoalSpec::try_from(&json!([16, [20]])).unwrap_err();
        assert_eq!(
            nested,
            Error::InvalidGoalSpecification {
                kind: "array of array".into(),
            }
        );
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!(
            GoalSpec::try_from(&json!(-4)).unwrap_err(),
            Error::InvalidAddress("-4".into())
        );
        assert_eq!(
            GoalSpec::try_from(&json!("0xzz")).unwrap_err(),
            Error::InvalidAddress("0xzz".into())
        );
    }
}
