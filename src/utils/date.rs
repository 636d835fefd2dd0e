use chrono::{Local, NaiveDate};

// Loan transactions carry a plain calendar date in local time.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use chrono::Local;
    use crate::utils::date::today;

    #[test]
    fn test_should_return_local_date() {
        assert_eq!(Local::now().date_naive(), today());
    }
}
