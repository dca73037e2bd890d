mod quiz;

pub use quiz::QuizView;
#[cfg(test)]
pub(crate) use quiz::QuizTestHandles;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
