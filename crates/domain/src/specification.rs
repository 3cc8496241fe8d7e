//! Composable predicates over domain objects.

/// A business predicate that a candidate either satisfies or not.
///
/// Specifications combine with [`Specification::and`], [`Specification::or`]
/// and [`Specification::not`] into larger rules, which repositories use to
/// filter aggregates.
pub trait Specification<T: ?Sized> {
    /// Returns true if the candidate satisfies this specification.
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// Requires both specifications.
    fn and<S>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And(self, other)
    }

    /// Requires at least one of the specifications.
    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or(self, other)
    }

    /// Negates this specification.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

/// Satisfied when both inner specifications are.
#[derive(Debug, Clone)]
pub struct And<A, B>(A, B);

/// Satisfied when either inner specification is.
#[derive(Debug, Clone)]
pub struct Or<A, B>(A, B);

/// Satisfied when the inner specification is not.
#[derive(Debug, Clone)]
pub struct Not<A>(A);

/// Satisfied by every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

/// Adapts a closure into a specification.
#[derive(Clone)]
pub struct Predicate<F>(pub F);

impl<T: ?Sized, A, B> Specification<T> for And<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) && self.1.is_satisfied_by(candidate)
    }
}

impl<T: ?Sized, A, B> Specification<T> for Or<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) || self.1.is_satisfied_by(candidate)
    }
}

impl<T: ?Sized, A> Specification<T> for Not<A>
where
    A: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.0.is_satisfied_by(candidate)
    }
}

impl<T: ?Sized> Specification<T> for Always {
    fn is_satisfied_by(&self, _candidate: &T) -> bool {
        true
    }
}

impl<T: ?Sized, F> Specification<T> for Predicate<F>
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (self.0)(candidate)
    }
}

impl<T: ?Sized, S> Specification<T> for Box<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

/// A type-erased specification, for rules assembled at runtime.
pub type BoxedSpecification<T> = Box<dyn Specification<T> + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    fn even() -> impl Specification<i32> {
        Predicate(|n: &i32| n % 2 == 0)
    }

    fn positive() -> impl Specification<i32> {
        Predicate(|n: &i32| *n > 0)
    }

    #[test]
    fn test_and() {
        let spec = even().and(positive());
        assert!(spec.is_satisfied_by(&4));
        assert!(!spec.is_satisfied_by(&-4));
        assert!(!spec.is_satisfied_by(&3));
    }

    #[test]
    fn test_or() {
        let spec = even().or(positive());
        assert!(spec.is_satisfied_by(&-4));
        assert!(spec.is_satisfied_by(&3));
        assert!(!spec.is_satisfied_by(&-3));
    }

    #[test]
    fn test_not() {
        let spec = even().not();
        assert!(spec.is_satisfied_by(&3));
        assert!(!spec.is_satisfied_by(&2));
    }

    #[test]
    fn test_boxed_composition() {
        let mut spec: BoxedSpecification<i32> = Box::new(Always);
        spec = Box::new(spec.and(even()));
        spec = Box::new(spec.and(positive()));
        assert!(spec.is_satisfied_by(&8));
        assert!(!spec.is_satisfied_by(&7));
    }
}
