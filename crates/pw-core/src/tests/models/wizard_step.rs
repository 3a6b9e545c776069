use crate::WizardStep;

use std::str::FromStr;

#[test]
fn test_wizard_step_as_str() {
    assert_eq!(WizardStep::Name.as_str(), "name");
    assert_eq!(WizardStep::Import.as_str(), "import");
    assert_eq!(WizardStep::Config.as_str(), "config");
}

#[test]
fn test_wizard_step_from_str() {
    assert_eq!(WizardStep::from_str("name").unwrap(), WizardStep::Name);
    assert_eq!(WizardStep::from_str("import").unwrap(), WizardStep::Import);
    assert_eq!(WizardStep::from_str("config").unwrap(), WizardStep::Config);
    assert!(WizardStep::from_str("finish").is_err());
}

#[test]
fn test_wizard_step_default_is_name() {
    assert_eq!(WizardStep::default(), WizardStep::Name);
}

#[test]
fn test_wizard_step_tab_order() {
    assert_eq!(
        WizardStep::ALL,
        [WizardStep::Name, WizardStep::Import, WizardStep::Config]
    );
}

#[test]
fn test_wizard_step_invalid_error_names_value() {
    let err = WizardStep::from_str("labels").unwrap_err();
    assert!(err.to_string().contains("labels"));
}
