use std::fmt::{Display, Formatter};

use humantime::format_duration;

use crate::prelude::*;

pub struct Instant(std::time::Instant);

impl Instant {
    pub fn now() -> Self {
        Self(std::time::Instant::now())
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed(self.0.elapsed())
    }
}

pub struct Elapsed(StdDuration);

impl Display for Elapsed {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&format_duration(self.0).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_display_ok() {
        assert_eq!(Elapsed(StdDuration::from_millis(1500)).to_string(), "1s 500ms");
    }
}
