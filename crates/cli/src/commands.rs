use crate::di::UseCases;
use crate::AdvertiseArgs;
use rpp_domain::{
    Config, ControllerAddress, ControllerLookup, DomainError, PreferenceMessage, Prefix,
};
use std::process::ExitCode;

pub async fn resolve(use_cases: &UseCases, raw_prefix: &str) -> ExitCode {
    match lookup(use_cases, raw_prefix).await {
        Some(_) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    }
}

pub async fn advertise(use_cases: &UseCases, config: &Config, args: &AdvertiseArgs) -> ExitCode {
    let message = PreferenceMessage::new(
        config.controller.ttl,
        args.local_prefixes.as_str(),
        args.preferences.as_str(),
    );

    let result = match &args.controller {
        Some(raw) => {
            let Ok(prefix) = Prefix::parse(&args.prefix) else {
                report_reverse_failure(&args.prefix);
                return ExitCode::FAILURE;
            };
            match ControllerAddress::parse(raw) {
                Ok(controller) => {
                    println!(
                        "{} (given on the command line)",
                        describe_controller(&prefix, &controller)
                    );
                    println!("Sending preferences...");
                    use_cases
                        .advertise_preferences
                        .execute_with_controller(&controller, &message)
                        .await
                }
                Err(e) => Err(e),
            }
        }
        None => {
            let Some((prefix, lookup)) = lookup(use_cases, &args.prefix).await else {
                return ExitCode::FAILURE;
            };
            if lookup.is_found() {
                println!("Sending preferences...");
            }
            use_cases
                .advertise_preferences
                .execute(&prefix, &lookup, &message)
                .await
                .map(|_| ())
        }
    };

    match result {
        Ok(()) => {
            println!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Resolves and reports the controller for `raw_prefix`. `None` means an
/// error was already reported.
async fn lookup(use_cases: &UseCases, raw_prefix: &str) -> Option<(Prefix, ControllerLookup)> {
    let prefix = match Prefix::parse(raw_prefix) {
        Ok(prefix) => prefix,
        Err(_) => {
            report_reverse_failure(raw_prefix);
            return None;
        }
    };

    match use_cases.resolve_controller.execute(&prefix).await {
        Ok(resolution) => {
            match &resolution.lookup {
                ControllerLookup::Found(controller) => {
                    println!("{}", describe_controller(&prefix, controller));
                }
                ControllerLookup::NotFound => {
                    println!("No RDE entry found for {}", prefix);
                }
            }
            Some((prefix, resolution.lookup))
        }
        Err(e) if e.is_input_error() => {
            report_reverse_failure(raw_prefix);
            None
        }
        Err(e) => {
            report_dns_failure(&e);
            None
        }
    }
}

fn describe_controller(prefix: &Prefix, controller: &ControllerAddress) -> String {
    format!("RDE controller for {} is {}", prefix, controller)
}

fn report_reverse_failure(raw_prefix: &str) {
    eprintln!("ERROR: failed to compute a reverse DNS for '{}'", raw_prefix);
}

fn report_dns_failure(error: &DomainError) {
    eprintln!("ERROR: DNS failure ({})", error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_controller_keeps_prefix_length() {
        let prefix = Prefix::parse("203.0.113.0/24").unwrap();
        let controller = ControllerAddress::parse("192.0.2.55").unwrap();

        assert_eq!(
            describe_controller(&prefix, &controller),
            "RDE controller for 203.0.113.0/24 is 192.0.2.55"
        );
    }
}
