// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppArguments {
    pub custom_config_path: Option<String>,
    pub hide_preview: bool,
    pub verbosity: u8,
    // set when the app should print this and exit instead of opening the window
    pub early_exit_message: Option<String>,
}

struct ArgumentDefinition {
    name: &'static str,
    short_name: Option<&'static str>,
    syntax: &'static str,
    description: &'static str,
    number_of_args: usize,
}

const SUPPORTED_ARGS: &[ArgumentDefinition] = &[
    ArgumentDefinition {
        name: "--help",
        short_name: None,
        syntax: "--help",
        description: "Show this help",
        number_of_args: 0,
    },
    ArgumentDefinition {
        name: "--version",
        short_name: None,
        syntax: "--version",
        description: "Show the application version",
        number_of_args: 0,
    },
    ArgumentDefinition {
        name: "--config-path",
        short_name: None,
        syntax: "--config-path <path>",
        description: "Set custom path to the config file",
        number_of_args: 1,
    },
    ArgumentDefinition {
        name: "--hide-preview",
        short_name: None,
        syntax: "--hide-preview",
        description: "Don't show the color swatch",
        number_of_args: 0,
    },
    ArgumentDefinition {
        name: "--verbose",
        short_name: Some("-v"),
        syntax: "--verbose, -v",
        description: "Log more details, can be repeated",
        number_of_args: 0,
    },
];

pub fn get_app_arguments() -> AppArguments {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_app_arguments(&args)
}

fn early_exit(message: String) -> AppArguments {
    AppArguments {
        early_exit_message: Some(message),
        ..Default::default()
    }
}

fn get_help_text() -> String {
    let mut help_text = "Supported arguments:\n".to_string();
    let max_syntax_len = SUPPORTED_ARGS
        .iter()
        .map(|arg| arg.syntax.len())
        .max()
        .unwrap_or(0);
    for arg in SUPPORTED_ARGS {
        help_text.push_str(&format!(
            "{:width$} {}\n",
            arg.syntax,
            arg.description,
            width = max_syntax_len
        ));
    }
    help_text.push('\n');
    help_text.push_str("Example: rgb-picker --config-path /home/user/picker.json -v");
    help_text
}

pub fn parse_app_arguments(args: &[String]) -> AppArguments {
    let mut result = AppArguments::default();

    let mut i: usize = 0;
    while i < args.len() {
        let arg = args[i].as_str();

        let found_arg = SUPPORTED_ARGS
            .iter()
            .find(|supported_arg| supported_arg.name == arg || supported_arg.short_name == Some(arg));

        let Some(found_arg) = found_arg else {
            return early_exit(format!(
                "Unknown argument: {}\nUse --help to see the list of supported arguments",
                arg
            ));
        };

        if i + found_arg.number_of_args >= args.len() && found_arg.number_of_args > 0 {
            return early_exit(format!(
                "Not enough arguments for {}\nUse --help to see the list of supported arguments",
                arg
            ));
        }

        match found_arg.name {
            "--help" => return early_exit(get_help_text()),
            "--version" => return early_exit(env!("CARGO_PKG_VERSION").to_string()),
            "--config-path" => result.custom_config_path = Some(args[i + 1].clone()),
            "--hide-preview" => result.hide_preview = true,
            "--verbose" => result.verbosity = result.verbosity.saturating_add(1),
            _ => {}
        }

        i += 1 + found_arg.number_of_args;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_give_defaults() {
        assert_eq!(parse_app_arguments(&[]), AppArguments::default());
    }

    #[test]
    fn test_all_arguments_are_read() {
        let arguments = parse_app_arguments(&to_args(&[
            "--config-path",
            "/tmp/picker.json",
            "--hide-preview",
            "-v",
            "--verbose",
        ]));

        assert_eq!(
            arguments,
            AppArguments {
                custom_config_path: Some("/tmp/picker.json".to_string()),
                hide_preview: true,
                verbosity: 2,
                early_exit_message: None,
            }
        );
    }

    #[test]
    fn test_unknown_argument_stops_the_app() {
        let arguments = parse_app_arguments(&to_args(&["--hide-preview", "--colour"]));

        let message = arguments.early_exit_message.unwrap();
        assert!(message.starts_with("Unknown argument: --colour"));
    }

    #[test]
    fn test_missing_value_stops_the_app() {
        let arguments = parse_app_arguments(&to_args(&["--config-path"]));

        let message = arguments.early_exit_message.unwrap();
        assert!(message.starts_with("Not enough arguments for --config-path"));
    }

    #[test]
    fn test_help_lists_every_argument() {
        let arguments = parse_app_arguments(&to_args(&["--help"]));

        let message = arguments.early_exit_message.unwrap();
        for arg in SUPPORTED_ARGS {
            assert!(message.contains(arg.syntax));
            assert!(message.contains(arg.description));
        }
    }

    #[test]
    fn test_version_is_reported() {
        let arguments = parse_app_arguments(&to_args(&["--version"]));

        assert_eq!(
            arguments.early_exit_message.as_deref(),
            Some(env!("CARGO_PKG_VERSION"))
        );
    }
}
