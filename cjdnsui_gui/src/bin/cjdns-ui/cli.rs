pub fn command() -> clap::Command {
    clap::Command::new("cjdns-ui")
        .bin_name("cjdns-ui")
        .version(clap::crate_version!())
        .about("Monitor and configure a cjdns node")
        .next_line_help(true)

        .arg(
            clap::Arg::new("address")
                .long("address")
                .value_name("ADDRESS")
                .required(false)
                .requires("port")
                .help("The node's cjdns IPv6 address to display")
        )
        .arg(
            clap::Arg::new("public-key")
                .long("public-key")
                .value_name("KEY")
                .required(false)
                .requires("port")
                .help("The node's public key to display")
        )
        .arg(
            clap::Arg::new("port")
                .long("port")
                .value_name("PORT")
                .required(false)
                .value_parser(clap::value_parser!(u16))
                .requires_all(["address", "public-key"])
                .help("The port the node accepts peers on")
        )

        .arg(
            clap::Arg::new("admin-address")
                .long("admin-address")
                .value_name("ADDRESS:PORT")
                .required(false)
                .default_value("127.0.0.1:11234")
                .value_hint(clap::ValueHint::Hostname)
                .help("Address of the node's admin interface")
        )
        .arg(
            clap::Arg::new("admin-password")
                .long("admin-password")
                .value_name("PASSWORD")
                .required(false)
                .help("Password for the node's admin interface")
        )
        .arg(
            clap::Arg::new("authorized-password")
                .long("authorized-password")
                .value_name("PASSWORD")
                .required(false)
                .action(clap::ArgAction::Append)
                .help("A password peers may connect with (may be given more than once)")
        )
}

#[cfg(test)]
mod tests {
    #[test]
    fn verify_command() {
        super::command().debug_assert();
    }
}
