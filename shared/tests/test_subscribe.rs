//! Subscription form outcomes through the public API.

#[cfg(test)]
mod tests {
    use nutri_page_shared::{Field, FieldError, FormMessage, SubmitOutcome, SubscribeInput};

    fn input(name: &str, email: &str, interest: &str) -> SubscribeInput {
        SubscribeInput {
            name: name.to_string(),
            email: email.to_string(),
            interest: interest.to_string(),
        }
    }

    #[test]
    fn all_fields_invalid_reports_every_error() {
        let outcome = input("", "bad", "").submit();

        assert!(!outcome.is_accepted());
        assert_eq!(outcome.field_error(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(outcome.field_error(Field::Email), Some(FieldError::EmailInvalid));
        assert_eq!(outcome.field_error(Field::Interest), Some(FieldError::InterestRequired));
        assert_eq!(outcome.message(), FormMessage::Error);
        assert_eq!(outcome.message().text(), "Please fix the highlighted fields and try again.");
    }

    #[test]
    fn valid_input_is_accepted_with_success_message() {
        let outcome = input("Jane", "jane@example.com", "fitness").submit();

        assert!(outcome.is_accepted());
        for field in Field::ALL {
            assert_eq!(outcome.field_error(field), None);
        }
        assert_eq!(outcome.message(), FormMessage::Success);
        assert!(outcome.message().text().starts_with("Thank you for subscribing!"));
    }

    #[test]
    fn resubmission_updates_only_changed_fields() {
        let first = input("", "jane@example", "").submit();
        assert_eq!(first.field_error(Field::Email), Some(FieldError::EmailInvalid));

        let second = input("Jane", "jane@example", "").submit();
        assert_eq!(second.field_error(Field::Name), None);
        assert_eq!(second.field_error(Field::Email), Some(FieldError::EmailInvalid));
        assert_eq!(second.field_error(Field::Interest), Some(FieldError::InterestRequired));
        assert_eq!(second.message(), FormMessage::Error);
    }

    #[test]
    fn accepted_submission_serializes_for_the_debug_log() {
        let SubmitOutcome::Accepted(submission) =
            input("Jane", "jane@example.com", "fitness").submit()
        else {
            panic!("expected acceptance");
        };
        let json = serde_json::to_value(&submission).expect("serialize submission");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["interest"], "fitness");
    }
}
