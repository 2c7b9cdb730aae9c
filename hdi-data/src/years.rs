//! The year span covered by the dataset and the dashboard slider.

/// First year with published indicator values.
pub const FIRST_YEAR: i32 = 1990;

/// Most recent year with published indicator values; also the default selection.
pub const LAST_YEAR: i32 = 2021;

/// Clamp an arbitrary year into `[FIRST_YEAR, LAST_YEAR]`.
pub fn clamp_year(year: i32) -> i32 {
    year.clamp(FIRST_YEAR, LAST_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_year_bounds() {
        assert_eq!(clamp_year(1985), FIRST_YEAR);
        assert_eq!(clamp_year(2000), 2000);
        assert_eq!(clamp_year(2030), LAST_YEAR);
    }
}
