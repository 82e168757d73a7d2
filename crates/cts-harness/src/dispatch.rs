use core::marker::PhantomData;

use crate::config::DispatchLogger;
use crate::{
    CartesianProduct, Combination, DiagnosticContext, ElemType, ElemVisitor, EntryList,
    HarnessError, Literal, Payload, Scalar,
};

/// A test body run once per combination.
///
/// Anything the body needs besides the combination (a queue, a sink, shared fixtures) lives in
/// the action itself. Closures can be dispatched directly with [dispatch]; implement this trait
/// for actions that carry more structure and run them with [dispatch_action].
pub trait Action<P = Payload> {
    /// Error returned when the action wants to stop the sweep.
    type Error: Into<HarnessError>;

    /// Run the body for one combination.
    fn run(&mut self, combination: &Combination<'_, P>) -> Result<(), Self::Error>;
}

/// Run `action` on every combination of `lists`, in enumeration order.
///
/// Every combination is attempted exactly once unless the action returns an error, which is
/// passed through unchanged and ends the sweep. Non-fatal failures belong in an
/// [AssertionSink](crate::AssertionSink) that records them and lets the action return `Ok`.
/// Panics are never caught.
pub fn dispatch<P, F, E>(lists: &[&EntryList<P>], mut action: F) -> Result<(), HarnessError>
where
    F: FnMut(&Combination<'_, P>) -> Result<(), E>,
    E: Into<HarnessError>,
{
    let product = CartesianProduct::new(lists)?;
    let full = DispatchLogger::with_global(|logger| logger.is_full());

    log::debug!(
        "Dispatching {} combinations over {} axes",
        product.len(),
        product.axes()
    );

    for combination in product.iter() {
        if full {
            DispatchLogger::with_global(|logger| logger.log_combination(&combination.context()));
        }
        log::trace!("Running combination [{}]", combination.composed_name());

        if let Err(err) = action(&combination) {
            let err = err.into();
            DispatchLogger::with_global(|logger| logger.log_error(&combination.context(), &err));
            return Err(err);
        }
    }

    Ok(())
}

/// Run a structured [Action] on every combination of `lists`, see [dispatch].
pub fn dispatch_action<P, A: Action<P>>(
    lists: &[&EntryList<P>],
    action: &mut A,
) -> Result<(), HarnessError> {
    dispatch(lists, |combination| action.run(combination))
}

/// A test body generic over one element type.
pub trait TypeAction {
    /// Run the body for the scalar type `T`.
    fn run<T: Scalar>(&mut self, context: &DiagnosticContext) -> Result<(), HarnessError>;
}

/// A test body generic over a pair of element types.
pub trait TypePairAction {
    /// Run the body for the scalar types `L` and `R`.
    fn run<L: Scalar, R: Scalar>(&mut self, context: &DiagnosticContext)
        -> Result<(), HarnessError>;
}

/// A test body generic over one element type and given one literal value.
pub trait TypeValueAction {
    /// Run the body for the scalar type `T` and the value.
    fn run<T: Scalar>(
        &mut self,
        value: Literal,
        context: &DiagnosticContext,
    ) -> Result<(), HarnessError>;
}

/// A test body generic over three element types.
pub trait TypeTripleAction {
    /// Run the body for the scalar types `A`, `B` and `C`.
    fn run<A: Scalar, B: Scalar, C: Scalar>(
        &mut self,
        context: &DiagnosticContext,
    ) -> Result<(), HarnessError>;
}

/// A test body generic over a pair of element types and given one literal value.
pub trait TypePairValueAction {
    /// Run the body for the scalar types `L` and `R` and the value.
    fn run<L: Scalar, R: Scalar>(
        &mut self,
        value: Literal,
        context: &DiagnosticContext,
    ) -> Result<(), HarnessError>;
}

/// Instantiate `action` with every type of the axis, in order.
pub fn for_all_types<A: TypeAction>(
    types: &EntryList,
    action: &mut A,
) -> Result<(), HarnessError> {
    dispatch(&[types], |combination| {
        let context = combination.context();
        combination.elem(0)?.visit(Single {
            action: &mut *action,
            context: &context,
        })
    })
}

/// Instantiate `action` with every pair of the two type axes, `lhs` varying slowest.
pub fn for_all_combinations<A: TypePairAction>(
    lhs: &EntryList,
    rhs: &EntryList,
    action: &mut A,
) -> Result<(), HarnessError> {
    dispatch(&[lhs, rhs], |combination| {
        let context = combination.context();
        let lhs = combination.elem(0)?;
        let rhs = combination.elem(1)?;
        lhs.visit(Outer {
            action: &mut *action,
            rhs,
            context: &context,
        })
    })
}

/// Instantiate `action` with every triple of the three type axes, `first` varying slowest.
pub fn for_all_triples<A: TypeTripleAction>(
    first: &EntryList,
    second: &EntryList,
    third: &EntryList,
    action: &mut A,
) -> Result<(), HarnessError> {
    dispatch(&[first, second, third], |combination| {
        let context = combination.context();
        let first = combination.elem(0)?;
        let second = combination.elem(1)?;
        let third = combination.elem(2)?;
        first.visit(FixFirst {
            action: &mut *action,
            second,
            rest: third,
            context: &context,
        })
    })
}

/// Instantiate `action` with every pair of the two type axes, once per value of `values`.
///
/// This is the usual shape of a conversion test: source type, target type, vector width.
pub fn for_all_combinations_and_values<A: TypePairValueAction>(
    lhs: &EntryList,
    rhs: &EntryList,
    values: &EntryList,
    action: &mut A,
) -> Result<(), HarnessError> {
    dispatch(&[lhs, rhs, values], |combination| {
        let context = combination.context();
        let lhs = combination.elem(0)?;
        let rhs = combination.elem(1)?;
        let value = combination.value(2)?;
        lhs.visit(FixFirstWithValue {
            action: &mut *action,
            rhs,
            value,
            context: &context,
        })
    })
}

/// Instantiate `action` with every type of `types`, once per value of `values`.
pub fn for_all_types_and_values<A: TypeValueAction>(
    types: &EntryList,
    values: &EntryList,
    action: &mut A,
) -> Result<(), HarnessError> {
    dispatch(&[types, values], |combination| {
        let context = combination.context();
        let elem = combination.elem(0)?;
        let value = combination.value(1)?;
        elem.visit(WithValue {
            action: &mut *action,
            value,
            context: &context,
        })
    })
}

struct Single<'a, A> {
    action: &'a mut A,
    context: &'a DiagnosticContext,
}

impl<A: TypeAction> ElemVisitor for Single<'_, A> {
    type Output = Result<(), HarnessError>;

    fn visit<T: Scalar>(self) -> Self::Output {
        self.action.run::<T>(self.context)
    }
}

struct Outer<'a, A> {
    action: &'a mut A,
    rhs: ElemType,
    context: &'a DiagnosticContext,
}

impl<A: TypePairAction> ElemVisitor for Outer<'_, A> {
    type Output = Result<(), HarnessError>;

    fn visit<L: Scalar>(self) -> Self::Output {
        self.rhs.visit(Inner::<L, A> {
            action: self.action,
            context: self.context,
            _lhs: PhantomData,
        })
    }
}

struct Inner<'a, L, A> {
    action: &'a mut A,
    context: &'a DiagnosticContext,
    _lhs: PhantomData<L>,
}

impl<L: Scalar, A: TypePairAction> ElemVisitor for Inner<'_, L, A> {
    type Output = Result<(), HarnessError>;

    fn visit<R: Scalar>(self) -> Self::Output {
        self.action.run::<L, R>(self.context)
    }
}

struct WithValue<'a, A> {
    action: &'a mut A,
    value: Literal,
    context: &'a DiagnosticContext,
}

impl<A: TypeValueAction> ElemVisitor for WithValue<'_, A> {
    type Output = Result<(), HarnessError>;

    fn visit<T: Scalar>(self) -> Self::Output {
        self.action.run::<T>(self.value, self.context)
    }
}

// An action with its first type fixed, seen as an action over the remaining axes.
struct Fixed<'a, T, A> {
    action: &'a mut A,
    _first: PhantomData<T>,
}

impl<'a, T, A> Fixed<'a, T, A> {
    fn new(action: &'a mut A) -> Self {
        Self {
            action,
            _first: PhantomData,
        }
    }
}

impl<T: Scalar, A: TypeTripleAction> TypePairAction for Fixed<'_, T, A> {
    fn run<L: Scalar, R: Scalar>(
        &mut self,
        context: &DiagnosticContext,
    ) -> Result<(), HarnessError> {
        self.action.run::<T, L, R>(context)
    }
}

impl<T: Scalar, A: TypePairValueAction> TypeValueAction for Fixed<'_, T, A> {
    fn run<R: Scalar>(
        &mut self,
        value: Literal,
        context: &DiagnosticContext,
    ) -> Result<(), HarnessError> {
        self.action.run::<T, R>(value, context)
    }
}

struct FixFirst<'a, A> {
    action: &'a mut A,
    second: ElemType,
    rest: ElemType,
    context: &'a DiagnosticContext,
}

impl<A: TypeTripleAction> ElemVisitor for FixFirst<'_, A> {
    type Output = Result<(), HarnessError>;

    fn visit<T: Scalar>(self) -> Self::Output {
        let mut fixed = Fixed::<T, A>::new(self.action);
        self.second.visit(Outer {
            action: &mut fixed,
            rhs: self.rest,
            context: self.context,
        })
    }
}

struct FixFirstWithValue<'a, A> {
    action: &'a mut A,
    rhs: ElemType,
    value: Literal,
    context: &'a DiagnosticContext,
}

impl<A: TypePairValueAction> ElemVisitor for FixFirstWithValue<'_, A> {
    type Output = Result<(), HarnessError>;

    fn visit<L: Scalar>(self) -> Self::Output {
        let mut fixed = Fixed::<L, A>::new(self.action);
        self.rhs.visit(WithValue {
            action: &mut fixed,
            value: self.value,
            context: self.context,
        })
    }
}
