use crate::{Props, shallow_eq_values};

pub fn should_update<R>(previous: &Props<R>, next: &Props<R>) -> bool {
    let (values, rest) = previous.split();
    let (next_values, next_rest) = next.split();
    let values_changed = !shallow_eq_values(next_values, values);
    let rest_changed = !rest.shallow_eq(&next_rest);
    log::trace!(
        "update gate for {:?}: values_changed={values_changed} rest_changed={rest_changed}",
        next.descriptor.id()
    );
    values_changed || rest_changed
}
