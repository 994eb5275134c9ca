use validator::ValidationErrors;

pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            match &error.message {
                Some(message) => messages.push(format!("{field}: {message}")),
                None => messages.push(format!("{field}: {code}", code = error.code)),
            }
        }
    }

    messages.sort();
    messages
}
