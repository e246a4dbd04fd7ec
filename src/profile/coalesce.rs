pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

pub fn first_non_empty<T: Blank>(candidates: &[&dyn Fn() -> Option<T>]) -> Option<T> {
    candidates
        .iter()
        .find_map(|candidate| candidate().filter(|value| !value.is_blank()))
}

pub fn first_non_empty_or<T: Blank>(candidates: &[&dyn Fn() -> Option<T>], default: T) -> T {
    first_non_empty(candidates).unwrap_or(default)
}
