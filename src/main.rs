use dsig_transform_params::{
    TransformParameterSpec,
    config::Config,
    telemetry,
    xml::{self, XmlConfig},
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    telemetry::init_tracing();

    let config = Config::load()?;
    let params = config.filter.to_params()?;
    tracing::info!(
        algorithm = params.algorithm(),
        xpath = params.xpath(),
        namespaces = ?params.namespace_map(),
        "Loaded XPath filter parameters"
    );

    let transform = xml::to_string(&XmlConfig::new().pretty(true), &params)?;
    println!("{transform}");

    Ok(())
}
