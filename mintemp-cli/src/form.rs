use inquire::{CustomType, error::InquireResult, validator::Validation};
use mintemp_core::{
    InputDomainError, PredictionInput,
    input::{validate_day_of_year, validate_finite, validate_year},
};

type ValidatorResult = Result<Validation, inquire::CustomUserError>;

/// Ask for the four climate parameters, pre-filled with `defaults`.
///
/// Range checks run inside the prompts, so whatever comes back is valid.
pub fn prompt_input(defaults: &PredictionInput) -> InquireResult<PredictionInput> {
    let year = CustomType::<i32>::new("📅 Year:")
        .with_default(defaults.year)
        .with_help_message("2010 to 2030")
        .with_error_message("Please type a whole number")
        .with_validator(year_validator)
        .prompt()?;

    let day_of_year = CustomType::<u16>::new("🗓 Day of year:")
        .with_default(defaults.day_of_year)
        .with_help_message("1 to 366")
        .with_error_message("Please type a whole number")
        .with_validator(day_of_year_validator)
        .prompt()?;

    let rolling7 = CustomType::<f64>::new("📈 7-day rolling mean (°C):")
        .with_default(defaults.rolling7)
        .with_error_message("Please type a number")
        .with_validator(rolling7_validator)
        .prompt()?;

    let rolling30 = CustomType::<f64>::new("📊 30-day rolling mean (°C):")
        .with_default(defaults.rolling30)
        .with_error_message("Please type a number")
        .with_validator(rolling30_validator)
        .prompt()?;

    Ok(PredictionInput::new(year, day_of_year, rolling7, rolling30))
}

fn to_validation(res: Result<(), InputDomainError>) -> Validation {
    match res {
        Ok(()) => Validation::Valid,
        Err(err) => Validation::Invalid(err.to_string().into()),
    }
}

fn year_validator(value: &i32) -> ValidatorResult {
    Ok(to_validation(validate_year(*value)))
}

fn day_of_year_validator(value: &u16) -> ValidatorResult {
    Ok(to_validation(validate_day_of_year(*value)))
}

fn rolling7_validator(value: &f64) -> ValidatorResult {
    Ok(to_validation(validate_finite("rolling7", *value)))
}

fn rolling30_validator(value: &f64) -> ValidatorResult {
    Ok(to_validation(validate_finite("rolling30", *value)))
}
