use crate::error::JobTrailError;
use jobtrail_domain::ID;

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: String) -> Result<ID, JobTrailError> {
        val.parse()
            .map_err(|e| JobTrailError::BadClientData(format!("{}", e)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_blank_ids() {
        assert!(Guard::against_malformed_id("  ".into()).is_err());
        assert_eq!(
            Guard::against_malformed_id("42".into()).unwrap(),
            ID::from(42)
        );
    }
}
