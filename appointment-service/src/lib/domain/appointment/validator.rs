use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;

use super::errors::AppointmentError;
use crate::domain::doctor::models::DoctorId;
use crate::domain::doctor::ports::DoctorDirectory;

/// Pre-write checks shared by appointment creation and update.
pub struct AppointmentValidator<DD>
where
    DD: DoctorDirectory,
{
    doctors: Arc<DD>,
}

impl<DD> AppointmentValidator<DD>
where
    DD: DoctorDirectory,
{
    pub fn new(doctors: Arc<DD>) -> Self {
        Self { doctors }
    }

    /// Check an appointment time and doctor reference.
    ///
    /// The date is checked first; the doctor directory is not consulted for a
    /// past date.
    ///
    /// # Arguments
    /// * `appointment_date_time` - Requested appointment time
    /// * `doctor_id` - Referenced doctor
    /// * `now` - Validation instant
    ///
    /// # Errors
    /// * `PastDate` - `appointment_date_time <= now`
    /// * `InvalidDoctor` - No doctor with this id
    /// * `Doctor` - Directory lookup failed
    pub async fn validate(
        &self,
        appointment_date_time: DateTime<Utc>,
        doctor_id: &DoctorId,
        now: DateTime<Utc>,
    ) -> Result<(), AppointmentError> {
        if appointment_date_time <= now {
            return Err(AppointmentError::PastDate);
        }

        if self.doctors.find_by_id(doctor_id).await?.is_none() {
            return Err(AppointmentError::InvalidDoctor);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Duration;
    use chrono::TimeZone;
    use mockall::mock;

    use super::*;
    use crate::domain::doctor::errors::DoctorError;
    use crate::domain::doctor::models::Doctor;

    mock! {
        pub TestDoctorDirectory {}

        #[async_trait]
        impl DoctorDirectory for TestDoctorDirectory {
            async fn find_by_id(&self, id: &DoctorId) -> Result<Option<Doctor>, DoctorError>;
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 1, 9, 0, 0).unwrap()
    }

    fn directory_with(doctor_id: DoctorId) -> MockTestDoctorDirectory {
        let mut doctors = MockTestDoctorDirectory::new();
        doctors
            .expect_find_by_id()
            .returning(move |id| {
                Ok((*id == doctor_id).then(|| Doctor {
                    id: doctor_id,
                    name: "Dr. Grey".to_string(),
                }))
            });
        doctors
    }

    #[tokio::test]
    async fn test_future_date_and_known_doctor() {
        let doctor_id = DoctorId::new();
        let validator = AppointmentValidator::new(Arc::new(directory_with(doctor_id)));

        let result = validator
            .validate(now() + Duration::hours(1), &doctor_id, now())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_past_date() {
        let doctor_id = DoctorId::new();
        let validator = AppointmentValidator::new(Arc::new(directory_with(doctor_id)));

        let err = validator
            .validate(now() - Duration::seconds(1), &doctor_id, now())
            .await
            .unwrap_err();

        assert!(matches!(err, AppointmentError::PastDate));
        assert_eq!(err.to_string(), "Appointment date must be in the future");
    }

    #[tokio::test]
    async fn test_date_equal_to_now_is_past() {
        let doctor_id = DoctorId::new();
        let validator = AppointmentValidator::new(Arc::new(directory_with(doctor_id)));

        let result = validator.validate(now(), &doctor_id, now()).await;
        assert!(matches!(result, Err(AppointmentError::PastDate)));
    }

    #[tokio::test]
    async fn test_unknown_doctor() {
        let validator = AppointmentValidator::new(Arc::new(directory_with(DoctorId::new())));

        let err = validator
            .validate(now() + Duration::hours(1), &DoctorId::new(), now())
            .await
            .unwrap_err();

        assert!(matches!(err, AppointmentError::InvalidDoctor));
        assert_eq!(err.to_string(), "Invalid doctor ID");
    }

    #[tokio::test]
    async fn test_past_date_checked_before_doctor_lookup() {
        let mut doctors = MockTestDoctorDirectory::new();
        doctors.expect_find_by_id().times(0);
        let validator = AppointmentValidator::new(Arc::new(doctors));

        let result = validator
            .validate(now() - Duration::days(1), &DoctorId::new(), now())
            .await;
        assert!(matches!(result, Err(AppointmentError::PastDate)));
    }

    #[tokio::test]
    async fn test_directory_failure_propagates() {
        let mut doctors = MockTestDoctorDirectory::new();
        doctors
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(DoctorError::DatabaseError("timeout".to_string())));
        let validator = AppointmentValidator::new(Arc::new(doctors));

        let result = validator
            .validate(now() + Duration::hours(1), &DoctorId::new(), now())
            .await;
        assert!(matches!(result, Err(AppointmentError::Doctor(_))));
    }
}
