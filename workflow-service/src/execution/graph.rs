// Dependency resolver
// Produces a deterministic linear execution order over the job graph
// (dependencies before dependents) and detects cycles.

use crate::workflow::models::Job;
use crate::{ServiceError, ServiceResult};

use indexmap::IndexMap;
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    InProgress,
    Done,
}

/// Resolve a topological execution order over the `needs` edges.
///
/// Depth-first traversal with three-color marking: a job's needs are
/// visited before the job itself is appended, so every job lands after
/// all of its dependencies. Roots are visited in document order, which
/// makes unconnected components resolve in first-appearance order.
///
/// A job encountered while still in progress signals a cycle and fails
/// with [`ServiceError::CyclicDependency`] naming that job. A `needs`
/// entry with no matching job is treated as a leaf with no further
/// dependencies; it is not emitted (there is nothing to execute) and
/// resolution does not fail - expression lookups against it simply
/// resolve to undefined at run time.
pub fn resolve_order(jobs: &IndexMap<String, Job>) -> ServiceResult<Vec<String>> {
    let mut order = Vec::with_capacity(jobs.len());
    let mut marks: HashMap<&str, Mark> = HashMap::new();

    for id in jobs.keys() {
        visit(id, jobs, &mut marks, &mut order)?;
    }
    Ok(order)
}

fn visit<'a>(
    id: &'a str,
    jobs: &'a IndexMap<String, Job>,
    marks: &mut HashMap<&'a str, Mark>,
    order: &mut Vec<String>,
) -> ServiceResult<()> {
    match marks.get(id) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::InProgress) => {
            return Err(ServiceError::CyclicDependency(id.to_string()));
        }
        None => {}
    }

    // Callers only pass ids present in the map
    let (key, job) = jobs.get_key_value(id).expect("job id resolved by caller");

    marks.insert(key, Mark::InProgress);
    for need in job.needs.to_vec() {
        // Re-borrow the key from the map so the mark outlives this
        // frame; a missing id is a dependency-less leaf with no spec to
        // execute, so it is neither visited nor emitted
        if let Some((need_key, _)) = jobs.get_key_value(&need) {
            visit(need_key, jobs, marks, order)?;
        }
    }
    marks.insert(key, Mark::Done);
    order.push(key.clone());
    Ok(())
}
