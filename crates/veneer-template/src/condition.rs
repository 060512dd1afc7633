use std::fmt;
use std::sync::Arc;
use veneer_types::{DirectiveError, Source};

/// User-supplied predicate over the bound object.
pub type PredicateFn = Arc<dyn Fn(&dyn Source) -> Result<bool, DirectiveError> + Send + Sync>;

/// One inclusion predicate: a literal or a callable on the bound object.
#[derive(Clone)]
pub enum Predicate {
    Literal(bool),
    Call(PredicateFn),
}

impl Predicate {
    pub fn from_fn(
        predicate: impl Fn(&dyn Source) -> Result<bool, DirectiveError> + Send + Sync + 'static,
    ) -> Self {
        Self::Call(Arc::new(predicate))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Literal(value) => write!(f, "Literal({value})"),
            Predicate::Call(_) => f.write_str("Call(..)"),
        }
    }
}

/// Inclusion condition on a node directive.
///
/// `when` includes the node when it holds; `unless` excludes the node when it
/// holds. Each predicate assigns the inclusion result independently, so when
/// both are given the `unless` result is authoritative (it is assigned last).
/// With neither predicate the node is always included.
#[derive(Clone, Debug, Default)]
pub struct Condition {
    pub when: Option<Predicate>,
    pub unless: Option<Predicate>,
}

impl Condition {
    /// The empty condition: always include.
    pub fn always() -> Self {
        Self::default()
    }

    pub fn when(predicate: Predicate) -> Self {
        Self {
            when: Some(predicate),
            unless: None,
        }
    }

    pub fn unless(predicate: Predicate) -> Self {
        Self {
            when: None,
            unless: Some(predicate),
        }
    }

    pub fn with_unless(mut self, predicate: Predicate) -> Self {
        self.unless = Some(predicate);
        self
    }

    /// Decide inclusion against the bound object.
    pub fn resolve(&self, source: &dyn Source) -> Result<bool, DirectiveError> {
        if self.when.is_none() && self.unless.is_none() {
            return Ok(true);
        }
        let mut include = false;
        if let Some(predicate) = &self.when {
            include = match predicate {
                Predicate::Literal(value) => *value,
                Predicate::Call(call) => call(source)?,
            };
        }
        if let Some(predicate) = &self.unless {
            include = match predicate {
                Predicate::Literal(value) => !value,
                Predicate::Call(call) => !call(source)?,
            };
        }
        Ok(include)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl Source for Probe {
        fn has_member(&self, name: &str) -> bool {
            name == "present"
        }
    }

    #[test]
    fn empty_condition_includes() {
        assert!(Condition::always().resolve(&Probe).expect("resolve"));
    }

    #[test]
    fn when_literal_and_callable() {
        assert!(
            Condition::when(Predicate::Literal(true))
                .resolve(&Probe)
                .expect("resolve")
        );
        assert!(
            !Condition::when(Predicate::Literal(false))
                .resolve(&Probe)
                .expect("resolve")
        );
        let by_member = Condition::when(Predicate::from_fn(|s| Ok(s.has_member("present"))));
        assert!(by_member.resolve(&Probe).expect("resolve"));
    }

    #[test]
    fn unless_literal_inverts() {
        assert!(
            Condition::unless(Predicate::Literal(false))
                .resolve(&Probe)
                .expect("resolve")
        );
        assert!(
            !Condition::unless(Predicate::Literal(true))
                .resolve(&Probe)
                .expect("resolve")
        );
    }

    #[test]
    fn unless_overrides_when() {
        let condition = Condition::when(Predicate::Literal(true))
            .with_unless(Predicate::from_fn(|_| Ok(true)));
        assert!(!condition.resolve(&Probe).expect("resolve"));

        let condition = Condition::when(Predicate::Literal(false))
            .with_unless(Predicate::Literal(false));
        assert!(condition.resolve(&Probe).expect("resolve"));
    }

    #[test]
    fn failing_predicate_propagates() {
        let condition = Condition::when(Predicate::from_fn(|_| Err("boom".into())));
        assert!(condition.resolve(&Probe).is_err());
    }
}
