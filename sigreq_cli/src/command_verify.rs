use sigreq::RsaSignatureRequest;

pub fn command_verify(matches: &clap::ArgMatches) {
    // Unwrap is OK, INPUT is required
    let input = matches.value_of("INPUT").unwrap();
    let raw = crate::strip_line_ending(crate::read_input("verify", input));

    let request = RsaSignatureRequest::from_bytes(&raw).unwrap_or_else(|e| {
        eprintln!("sigreq verify: {} ({:?})", e, e.kind());
        std::process::exit(1);
    });

    let output = render(&request, matches.is_present("json")).unwrap_or_else(|e| {
        eprintln!("sigreq verify: unable to render request as JSON: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}

/// `OK`, or the validated request as pretty JSON
pub fn render(request: &RsaSignatureRequest, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(request)
    } else {
        Ok("OK".to_owned())
    }
}
