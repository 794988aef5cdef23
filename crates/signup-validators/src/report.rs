//! Whole-form validation

use crate::{
	FieldError, FieldId, FieldResult, FieldValidator, SignupData,
	email::EmailValidator,
	mobile::MobileValidator,
	name::NameValidator,
	password::{ConfirmPasswordValidator, PasswordLengthValidator},
};

/// Results of every field check for one submission, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
	results: Vec<(FieldId, FieldResult<()>)>,
}

impl ValidationReport {
	/// Validate every field of `data` with the given password rule.
	///
	/// All five checks always run; a failure never short-circuits the rest.
	pub fn build(data: &SignupData, password: &PasswordLengthValidator) -> Self {
		let results = FieldId::ALL
			.iter()
			.map(|field| {
				let value = data.get(*field);
				let result = match field {
					FieldId::Name => NameValidator::new().validate(value),
					FieldId::Email => EmailValidator::new().validate(value),
					FieldId::Mobile => MobileValidator::new().validate(value),
					FieldId::Password => password.validate(value),
					FieldId::ConfirmPassword => {
						ConfirmPasswordValidator::new().validate(&data.password, value)
					}
				};
				(*field, result)
			})
			.collect();
		Self { results }
	}

	pub fn is_valid(&self) -> bool {
		self.results.iter().all(|(_, result)| result.is_ok())
	}

	pub fn results(&self) -> &[(FieldId, FieldResult<()>)] {
		&self.results
	}

	pub fn get(&self, field: FieldId) -> Option<&FieldResult<()>> {
		self.results
			.iter()
			.find(|(id, _)| *id == field)
			.map(|(_, result)| result)
	}

	/// Failing fields and their errors, in form order.
	pub fn errors(&self) -> impl Iterator<Item = (FieldId, &FieldError)> {
		self.results
			.iter()
			.filter_map(|(id, result)| result.as_ref().err().map(|e| (*id, e)))
	}
}

/// Validate every field with the default rules.
///
/// # Examples
///
/// ```
/// use signup_validators::{FieldId, SignupData, validate_all};
///
/// let data = SignupData::new("Al", "alice@example.com", "9998887776", "Abc12345!", "Abc12345!");
/// let report = validate_all(&data);
///
/// assert!(!report.is_valid());
/// assert_eq!(report.results().len(), 5);
/// assert_eq!(report.errors().map(|(id, _)| id).collect::<Vec<_>>(), vec![FieldId::Name]);
/// ```
pub fn validate_all(data: &SignupData) -> ValidationReport {
	ValidationReport::build(data, &PasswordLengthValidator::new())
}
