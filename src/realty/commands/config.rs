use crate::commands::CmdResult;
use crate::config::RealtyConfig;
use crate::error::Result;

pub fn run(config: &RealtyConfig) -> Result<CmdResult> {
    let document = config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{} = {}", key, value))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(CmdResult::default().with_document(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_all_keys() {
        let result = run(&RealtyConfig::default()).unwrap();
        let doc = result.document.unwrap();
        assert!(doc.contains("storage_key = products"));
        assert!(doc.contains("duplicate_ids = reject"));
        assert!(doc.contains("zero_bound_is_unset = true"));
    }
}
