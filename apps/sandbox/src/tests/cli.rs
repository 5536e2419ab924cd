use crate::cli::Args;
use crate::demos::Demo;

use clap::Parser;
use clap::error::ErrorKind;

fn parse(args: &[&str]) -> Result<Args, clap::Error> {
    Args::try_parse_from(std::iter::once("mpesa-sandbox").chain(args.iter().copied()))
}

#[test]
fn given_no_arguments_when_parsed_then_defaults_to_stk_push() {
    let args = parse(&[]).unwrap();

    assert_eq!(args.selected_demos(), vec![Demo::StkPush]);
}

#[test]
fn given_all_flag_when_parsed_then_selects_every_demo_in_order() {
    let args = parse(&["--all"]).unwrap();

    let demos = args.selected_demos();
    assert_eq!(demos.len(), 9);
    assert_eq!(demos.first(), Some(&Demo::StkPush));
    assert_eq!(demos.last(), Some(&Demo::DynamicQr));
}

#[test]
fn given_several_names_when_parsed_then_keeps_order() {
    let args = parse(&["qr", "c2b", "stk-query"]).unwrap();

    assert_eq!(
        args.selected_demos(),
        vec![Demo::DynamicQr, Demo::C2bTransaction, Demo::StkQuery]
    );
}

#[test]
fn given_uppercase_name_when_parsed_then_accepted() {
    let args = parse(&["BALANCE"]).unwrap();

    assert_eq!(args.selected_demos(), vec![Demo::AccountBalance]);
}

#[test]
fn given_unknown_name_when_parsed_then_rejected_as_invalid_value() {
    let error = parse(&["refund"]).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidValue);
    assert!(error.to_string().contains("refund"));
}

/// **VALUE**: `--help` prints usage instead of being treated as a demo name.
#[test]
fn given_help_flag_when_parsed_then_displays_help_listing_demos() {
    let error = parse(&["--help"]).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::DisplayHelp);
    let help = error.to_string();
    assert!(help.contains("stk-push"));
    assert!(help.contains("--all"));
}

#[test]
fn given_all_flag_with_names_when_parsed_then_conflict_is_reported() {
    let error = parse(&["--all", "qr"]).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn given_args_definition_when_checked_then_is_consistent() {
    use clap::CommandFactory;

    Args::command().debug_assert();
}
