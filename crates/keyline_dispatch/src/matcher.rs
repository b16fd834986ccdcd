//! Overload resolution.
//!
//! Matches a token sequence against every overload registered under its
//! keyword. Each overload is tracked as an independent candidate with its
//! own cursor and collected values; candidates advance one declared
//! parameter at a time and drop out as soon as their next parameter rejects
//! the input. Survivors that consumed the input exactly are then ranked by
//! the priority of the first parameter where their signatures differ.

use std::cmp::Ordering;
use std::sync::Arc;

use keyline_foundation::{Error, Result, Value};

use crate::command::CommandDescriptor;
use crate::param::ParamKind;
use crate::registry::CommandRegistry;

/// A token sequence resolved to a single overload.
#[derive(Clone, Debug)]
pub struct Resolution {
    /// The winning overload
    pub descriptor: Arc<CommandDescriptor>,
    /// Converted arguments, one per declared parameter
    pub args: Vec<Value>,
}

impl Resolution {
    /// Runs the winning overload's action with the converted arguments.
    pub fn invoke(&self) {
        self.descriptor.invoke(&self.args);
    }

    /// Signature of the winning overload.
    #[must_use]
    pub fn signature(&self) -> String {
        self.descriptor.signature()
    }
}

/// Per-overload match state, private to one resolution.
struct Candidate {
    descriptor: Arc<CommandDescriptor>,
    next_param: usize,
    cursor: usize,
    values: Vec<Value>,
}

impl Candidate {
    fn new(descriptor: Arc<CommandDescriptor>) -> Self {
        let capacity = descriptor.arity();
        Self {
            descriptor,
            next_param: 0,
            // Token 0 is the keyword
            cursor: 1,
            values: Vec::with_capacity(capacity),
        }
    }

    fn is_complete(&self) -> bool {
        self.next_param == self.descriptor.arity()
    }

    /// Matches the next declared parameter.
    ///
    /// Returns `Ok(false)` when the candidate is no longer viable. A
    /// candidate with every parameter matched stays viable only while the
    /// input is exhausted.
    fn step<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<bool> {
        let Some(param) = self.descriptor.params().get(self.next_param) else {
            return Ok(self.cursor == tokens.len());
        };
        if !param.accepts(tokens, self.cursor) {
            return Ok(false);
        }

        let (value, next) = param.consume(tokens, self.cursor)?;
        self.values.push(value);
        self.cursor = next;
        self.next_param += 1;
        Ok(true)
    }
}

/// Resolves token sequences against a command registry.
pub struct Matcher;

impl Matcher {
    /// Resolves `tokens` to exactly one registered overload without
    /// invoking it.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `tokens` is empty
    /// - `CommandNotFound` if no overload shares the keyword
    /// - `NoViableOverload` if every overload is eliminated
    /// - `AmbiguousCommand` if several overloads match with no priority winner
    /// - `ContractViolation` if a parameter fails to convert tokens it accepted
    pub fn resolve<S: AsRef<str>>(registry: &CommandRegistry, tokens: &[S]) -> Result<Resolution> {
        let keyword = tokens.first().ok_or_else(Error::empty_input)?.as_ref();

        let overloads = registry.lookup(keyword);
        if overloads.is_empty() {
            log::debug!("no command registered for `{keyword}`");
            return Err(Error::command_not_found(keyword));
        }
        log::debug!(
            "matching `{keyword}` ({} token(s)) against {} overload(s)",
            tokens.len(),
            overloads.len()
        );

        let mut candidates: Vec<Candidate> = overloads.into_iter().map(Candidate::new).collect();
        let mut furthest = 1;

        while candidates.iter().any(|c| !c.is_complete()) {
            candidates = Self::advance(candidates, tokens, &mut furthest)?;
        }
        candidates.retain(|c| {
            let exhausted = c.cursor == tokens.len();
            if !exhausted {
                log::trace!(
                    "eliminated `{}`: {} token(s) left over",
                    c.descriptor,
                    tokens.len() - c.cursor
                );
            }
            exhausted
        });

        let winner = match candidates.len() {
            0 => {
                log::debug!("no overload of `{keyword}` survived (furthest token {furthest})");
                return Err(Error::no_viable_overload(keyword, furthest));
            }
            1 => candidates.swap_remove(0),
            _ => Self::break_tie(keyword, candidates)?,
        };

        log::debug!("resolved to `{}`", winner.descriptor);
        Ok(Resolution {
            descriptor: winner.descriptor,
            args: winner.values,
        })
    }

    /// Advances every candidate by one parameter, keeping the viable ones.
    fn advance<S: AsRef<str>>(
        candidates: Vec<Candidate>,
        tokens: &[S],
        furthest: &mut usize,
    ) -> Result<Vec<Candidate>> {
        let mut survivors = Vec::with_capacity(candidates.len());
        for mut candidate in candidates {
            if candidate.step(tokens)? {
                *furthest = (*furthest).max(candidate.cursor);
                survivors.push(candidate);
            } else {
                log::trace!(
                    "eliminated `{}` at token {}",
                    candidate.descriptor,
                    candidate.cursor
                );
            }
        }
        Ok(survivors)
    }

    /// Picks the candidate that outranks every other one.
    fn break_tie(keyword: &str, candidates: Vec<Candidate>) -> Result<Candidate> {
        let outranks = |a: &Candidate, b: &Candidate| {
            Self::compare_signatures(a.descriptor.params(), b.descriptor.params())
                == Ordering::Greater
        };

        let winner = candidates.iter().position(|a| {
            candidates
                .iter()
                .filter(|b| !std::ptr::eq(*b, a))
                .all(|b| outranks(a, b))
        });
        if let Some(index) = winner {
            let mut candidates = candidates;
            return Ok(candidates.swap_remove(index));
        }

        let undominated: Vec<String> = candidates
            .iter()
            .filter(|a| !candidates.iter().any(|b| outranks(b, a)))
            .map(|c| c.descriptor.signature())
            .collect();
        let signatures = if undominated.is_empty() {
            candidates.iter().map(|c| c.descriptor.signature()).collect()
        } else {
            undominated
        };

        log::debug!("`{keyword}` is ambiguous between {} overload(s)", signatures.len());
        Err(Error::ambiguous(keyword, signatures))
    }

    /// Compares two signatures by the priority of their first differing
    /// parameter. Identical signatures compare equal.
    #[must_use]
    pub fn compare_signatures(a: &[ParamKind], b: &[ParamKind]) -> Ordering {
        a.iter()
            .zip(b)
            .find(|(pa, pb)| pa != pb)
            .map_or(Ordering::Equal, |(pa, pb)| pa.priority().cmp(&pb.priority()))
    }
}
