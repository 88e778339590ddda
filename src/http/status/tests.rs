use crate::http::status::{registry, Class, Status};
use crate::http::test_utils::*;
use crate::http::{ErrorKind, Protocol};
use proptest::prelude::*;

#[test]
fn resolves_well_known_codes() {
    let not_found = Status::resolve(404).unwrap();
    assert_eq!(not_found, Status::NOT_FOUND);
    assert_eq!(not_found.code(), 404);
    assert_eq!(not_found.reason(), "Not Found");

    let im_used = Status::resolve(226).unwrap();
    assert_eq!(im_used.code(), 226);
    assert_eq!(im_used.reason(), "IM Used");

    assert_eq!(Status::resolve(200).unwrap().reason(), "Ok");
    assert_eq!(Status::resolve(418).unwrap(), Status::I_AM_A_TEAPOT);
    assert_eq!(Status::resolve(522).unwrap(), Status::CONNECTION_TIMED_OUT);
}

#[test]
fn resolves_non_standard_codes() {
    let success = Status::resolve(250).unwrap();
    assert_eq!(success, Status::SUCCESS_250);
    assert_eq!(success.reason(), "Non-standard success code 250");

    assert_eq!(
        Status::resolve(399).unwrap().reason(),
        "Non-standard redirection code 399"
    );
    assert_eq!(Status::resolve(599).unwrap(), Status::ERROR_599);
}

#[test]
fn first_declared_wins_for_425() {
    let status = Status::resolve(425).unwrap();
    assert_eq!(status, Status::UNORDERED_COLLECTION);
    assert_eq!(status.reason(), "Unordered Collection");
    assert_ne!(status, Status::TOO_EARLY);

    assert_eq!(Status::TOO_EARLY.code(), 425);
    assert_eq!(Status::TOO_EARLY.reason(), "Too Early");
}

#[test]
fn too_early_is_the_only_shadowed_entry() {
    let shadowed: Vec<Status> = registry().shadowed().map(|e| e.status()).collect();
    assert_eq!(shadowed, vec![Status::TOO_EARLY]);
}

#[test]
fn first_declared_wins_in_any_table() {
    let registry = duplicate_registry();
    assert_eq!(registry.len(), 4);
    assert_eq!(registry.resolve(200).unwrap().symbol(), "OK");
    assert_eq!(registry.resolve(201).unwrap().reason(), "Created");

    let shadowed: Vec<&str> = registry.shadowed().map(|e| e.symbol()).collect();
    assert_eq!(shadowed, vec!["ACCEPTED", "NO_CONTENT"]);
}

#[test]
#[should_panic(expected = "has no reason phrase")]
fn rejects_entry_without_reason() {
    let _ = crate::http::status::Registry::new(&MISSING_REASON_TABLE);
}

#[test]
fn unknown_codes_fail() {
    for code in [999, -1, 600, 0, 99, 103, 420 + 1000, i32::MAX, i32::MIN] {
        let err = Status::resolve(code).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidStatusCode(code));
        assert_eq!(err.invalid_code(), Some(code));
        assert_eq!(err.message(), format!("Invalid HTTP status code: {code}"));
    }
}

#[test]
fn unknown_code_600() {
    let err = Status::try_from(600i32).unwrap_err();
    assert_eq!(err.invalid_code(), Some(600));
    assert!(!registry().contains(600));
}

#[test]
fn every_entry_resolves_its_own_code() {
    for entry in registry() {
        let resolved = registry().resolve(entry.code().into()).unwrap();
        assert_eq!(resolved.code(), entry.code());
        if !registry().shadowed().any(|s| s.status() == entry.status()) {
            assert_eq!(resolved.status(), entry.status());
        }
    }
}

#[test]
fn enumerates_in_declaration_order() {
    let all: Vec<Status> = Status::all().collect();
    assert_eq!(all.len(), 404);
    assert_eq!(all.len(), registry().len());
    assert_eq!(all[0], Status::CONTINUE);
    assert_eq!(all[3], Status::OK);
    assert_eq!(all.last(), Some(&Status::ERROR_599));

    let unordered = all.iter().position(|s| *s == Status::UNORDERED_COLLECTION);
    let too_early = all.iter().position(|s| *s == Status::TOO_EARLY);
    assert_eq!(too_early, unordered.map(|i| i + 1));
}

#[test]
fn symbols_are_unique() {
    let mut symbols: Vec<&str> = Status::all().map(Status::symbol).collect();
    symbols.sort_unstable();
    symbols.dedup();
    assert_eq!(symbols.len(), registry().len());
}

#[test]
fn entry_and_status_agree() {
    let entry = Status::PERMANENT_REDIRECT.entry();
    assert_eq!(entry.status(), Status::PERMANENT_REDIRECT);
    assert_eq!(entry.code(), 308);
    assert_eq!(entry.reason(), "Permanent Redirect");
    assert_eq!(entry.symbol(), "PERMANENT_REDIRECT");
}

#[test]
fn resolve_is_stable_across_threads() {
    let results = resolve_from_threads(200, 8, 250);
    assert_eq!(results.len(), 2000);
    for result in results {
        assert_eq!(result.unwrap().reason(), "Ok");
    }
}

#[test]
fn symbol_text_mirrors_symbol() {
    let text = Status::NOT_FOUND.symbol_text();
    let literal = "NOT_FOUND";
    assert_eq!(text.len(), literal.len());
    for (i, c) in literal.chars().enumerate() {
        assert_eq!(text.char_at(i), Some(c));
    }
    assert_eq!(text.char_at(literal.len()), None);
    assert_eq!(text, literal);
    assert_eq!(text.to_string(), literal);
}

#[test]
fn symbol_text_sub_sequence() {
    let text = Status::NOT_FOUND.symbol_text();
    assert_eq!(text.sub_sequence(0..3), Some("NOT"));
    assert_eq!(text.sub_sequence(4..9), Some("FOUND"));
    assert_eq!(text.sub_sequence(9..9), Some(""));
    assert_eq!(text.sub_sequence(4..10), None);
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = text.sub_sequence(5..2);
    assert_eq!(reversed, None);
}

#[test]
fn classifies_statuses() {
    assert_eq!(Status::CONTINUE.class(), Class::Informational);
    assert!(Status::OK.is_success());
    assert!(Status::SUCCESS_299.is_success());
    assert!(Status::FOUND.is_redirection());
    assert!(Status::NOT_FOUND.is_client_error());
    assert!(Status::BAD_GATEWAY.is_server_error());
    assert!(Status::ERROR_419.is_error());
    assert!(!Status::CREATED.is_error());

    assert_eq!(Class::of(99), None);
    assert_eq!(Class::of(600), None);
    assert_eq!(Class::ServerError.to_string(), "5xx Server Error");
}

#[test]
fn renders_status_lines() {
    assert_eq!(Status::NOT_FOUND.to_string(), "404 Not Found");
    assert_eq!(
        Status::NOT_FOUND.status_line(Protocol::HTTP1),
        "HTTP/1.1 404 Not Found"
    );
    assert_eq!(
        format!("{:?}", Status::IM_USED),
        "Status::IM_USED(226)"
    );
}

#[test]
fn converts_from_u16() {
    assert_eq!(Status::try_from(201u16).unwrap(), Status::CREATED);
    assert_eq!(u16::from(Status::GONE), 410);
    assert!(Status::try_from(700u16).is_err());
}

proptest! {
    #[test]
    fn resolve_matches_registered_codes(code in any::<i32>()) {
        match Status::resolve(code) {
            Ok(status) => {
                prop_assert_eq!(i32::from(status.code()), code);
            }
            Err(err) => {
                prop_assert_eq!(err.invalid_code(), Some(code));
                prop_assert!(registry().iter().all(|e| i32::from(e.code()) != code));
            }
        }
    }

    #[test]
    fn resolve_covers_every_code_in_range(code in 100i32..600) {
        let registered = registry().iter().any(|e| i32::from(e.code()) == code);
        prop_assert_eq!(Status::resolve(code).is_ok(), registered);
    }
}
