//! CLI command implementations.

use crate::AppContext;
use serde::Serialize;
use velas_types::address;
use velas_types::AddressKind;

type Result = std::result::Result<(), Box<dyn std::error::Error>>;

/// Known ETH/VLX address pairs.
pub const KNOWN_VECTORS: [(&str, &str); 7] = [
    ("0x32Be343B94f860124dC4fEe278FDCBD38C102D88", "V5dJeCa7bmkqmZF53TqjRbnB4fG6hxuu4f"),
    ("0x000000000000000000000000000000000000000f", "V111111111111111111111111112jSS6vy"),
    ("0xf000000000000000000000000000000000000000", "VNt1B3HD3MghPihCxhwMxNKRerBPPbiwvZ"),
    ("0x0000000000000000000000000000000000000001", "V111111111111111111111111111CdXjnE"),
    ("0x1000000000000000000000000000000000000000", "V2Tbp525fpnBRiSt4iPxXkxMyf5ZX7bGAJ"),
    ("0x0000000000000000000000000000000000000000", "V1111111111111111111111111113iMDfC"),
    ("0xffffffffffffffffffffffffffffffffffffffff", "VQLbz7JHiBTspS962RLKV8GndWFwdcRndD"),
];

#[derive(Debug, Serialize)]
struct Conversion<'a> {
    input: &'a str,
    output: String,
    kind: AddressKind,
}

#[derive(Debug, Serialize)]
struct VectorResult {
    eth: String,
    vlx: String,
    eth_to_vlx: bool,
    vlx_to_eth: bool,
}

impl VectorResult {
    fn passed(&self) -> bool {
        self.eth_to_vlx && self.vlx_to_eth
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn render_conversion(
    ctx: &AppContext,
    conversion: &Conversion<'_>,
) -> std::result::Result<String, serde_json::Error> {
    if ctx.json {
        serde_json::to_string_pretty(conversion)
    } else {
        Ok(conversion.output.clone())
    }
}

fn print_conversion(ctx: &AppContext, input: &str, output: String, kind: AddressKind) -> Result {
    let conversion = Conversion { input, output, kind };
    println!("{}", render_conversion(ctx, &conversion)?);
    Ok(())
}

fn run_vector(eth: &str, vlx: &str) -> VectorResult {
    let forward = address::eth_to_vlx(eth);
    let backward = address::vlx_to_eth(vlx);
    log::debug!("vector {}: {:?} / {:?}", eth, forward, backward);

    VectorResult {
        eth: eth.to_string(),
        vlx: vlx.to_string(),
        eth_to_vlx: forward.map(|v| v == vlx).unwrap_or(false),
        vlx_to_eth: backward.map(|e| e == eth.to_lowercase()).unwrap_or(false),
    }
}

fn render_vector(index: usize, result: &VectorResult) -> String {
    let status = if result.passed() { "ok" } else { "FAIL" };
    format!("{:>2}: {:<4} {} <-> {}", index, status, result.eth, result.vlx)
}

// ─── Commands ───────────────────────────────────────────────────────────────

pub fn to_vlx(ctx: &AppContext, input: &str) -> Result {
    let output = address::eth_to_vlx(input)?;
    print_conversion(ctx, input, output, AddressKind::Vlx)
}

pub fn to_eth(ctx: &AppContext, input: &str) -> Result {
    let output = address::vlx_to_eth(input)?;
    print_conversion(ctx, input, output, AddressKind::Eth)
}

pub fn convert(ctx: &AppContext, input: &str) -> Result {
    let kind = address::detect_kind(input)?;
    let output = address::convert(input)?;
    print_conversion(ctx, input, output, kind.opposite())
}

pub fn describe(ctx: &AppContext, input: &str) -> Result {
    let description = address::describe_address(input);
    if ctx.json {
        let value = serde_json::json!({
            "input": input,
            "valid": address::convert(input).is_ok(),
            "description": description,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", description);
    }
    Ok(())
}

pub fn check(ctx: &AppContext) -> Result {
    let results: Vec<VectorResult> = KNOWN_VECTORS
        .iter()
        .map(|(eth, vlx)| run_vector(eth, vlx))
        .collect();

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for (i, result) in results.iter().enumerate() {
            println!("{}", render_vector(i, result));
        }
    }

    let failed = results.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        return Err(format!("{} of {} vectors failed", failed, results.len()).into());
    }
    if !ctx.json {
        println!("success");
    }
    Ok(())
}
