//! Terminal drawing of the array and of what a step did

use sortstep::event::{Event, Role, StepResult};
use sortstep::engine::Value;

/// Width of the longest bar in characters
const BAR_WIDTH: u64 = 40;

/// Short label shown next to an index touched by a step
fn role_label(role: Role) -> &'static str {
    match role {
        Role::Compared => "compared",
        Role::Swapped => "swapped",
        Role::Pivot => "pivot",
        Role::PivotPlaced => "pivot placed",
        Role::Key => "key",
        Role::Shifted => "shifted",
        Role::Inserted => "inserted",
        Role::Minimum => "minimum",
        Role::NoSwap => "in place",
        Role::SubRange => "sub-range",
        Role::Merging => "merging",
        Role::Updated => "updated",
        Role::Sorted => "sorted",
    }
}

/// Draw `data` as one horizontal bar per element, labelling the indices in `events`
///
/// When several events touch the same index the last one wins.
pub fn frame(data: &[Value], events: &[Event<Value>]) -> String {
    let mut roles: Vec<Option<Role>> = vec![None; data.len()];
    for event in events {
        for &index in &event.indices {
            if let Some(role) = roles.get_mut(index) {
                *role = Some(event.role);
            }
        }
    }

    let max = data
        .iter()
        .map(|value| value.unsigned_abs())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut lines = Vec::with_capacity(data.len());
    for (index, (value, role)) in data.iter().zip(roles).enumerate() {
        // Widened so values near `i64::MAX` cannot overflow
        let length = (u128::from(value.unsigned_abs()) * u128::from(BAR_WIDTH))
            .div_ceil(u128::from(max)) as usize;
        let (fill, label) = match role {
            Some(role) => ('▒', format!(" <- {}", role_label(role))),
            None => ('█', String::new()),
        };

        lines.push(format!(
            "{index:>3} {value:>5} {bar}{label}",
            bar = fill.to_string().repeat(length)
        ));
    }

    lines.join("\n")
}

/// One line describing the events of `result`
pub fn describe(result: &StepResult<Value>) -> String {
    if result.events.is_empty() {
        return if result.done {
            "nothing left to do".to_string()
        } else {
            "no change".to_string()
        };
    }

    result
        .events
        .iter()
        .map(|event| {
            let indices = event
                .indices
                .iter()
                .map(|index| format!("#{index}"))
                .collect::<Vec<_>>()
                .join(", ");

            if event.role == Role::Sorted {
                "array sorted".to_string()
            } else if event.new_values.is_empty() {
                format!("{} {indices}", role_label(event.role))
            } else {
                format!("{} {indices} -> {:?}", role_label(event.role), event.new_values)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
