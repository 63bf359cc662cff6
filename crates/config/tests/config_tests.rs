// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use muxgen_config::DeviceDescriptor;
use muxgen_core::emit_info_table;
use muxgen_ir::{FunctionId, MuxSelection};
use std::io::Write;

const K20_YAML: &str = r#"
schema_version: "1.0"
family: MK20D5
devices:
  - name: MK20DX128VLH5
    manual: K20P64M50SF0RM
    package: LQFP64
packages:
  LQFP64:
    PTC1: "44"
    PTA1: ""
    PTB0: "*"
    ADC0_DP0: ""
pins:
  - name: PTC1
    reset: ADC0_SE15
    default: FTM0_CH0
    mux:
      0: ADC0_SE15
      1: PTC1/LLWU_P6
      4: FTM0_CH0
  - name: PTA1
    mux:
      1: PTA1
      3: FTM0_CH0
      2: UART0_RX
  - name: PTB0
    mux:
      1: PTB0
      3: FTM0_CH0
  - name: ADC0_DP0
    reset: ADC0_DP0
peripherals:
  - name: FTM0
    clock_reg: SIM->SCGC6
    irqs: [FTM0_IRQn]
dma:
  - instance: 0
    channel: 20
    source: FTM0_CH0
"#;

#[test]
fn test_descriptor_parses() {
    let desc = DeviceDescriptor::from_yaml_str(K20_YAML).unwrap();
    assert_eq!(desc.devices.len(), 1);
    assert_eq!(desc.pins.len(), 4);
    assert_eq!(desc.pins[0].mux.get(&4).map(String::as_str), Some("FTM0_CH0"));
    assert_eq!(desc.peripherals[0].clock_mask, None);
    assert_eq!(desc.packages["LQFP64"]["PTB0"], "*");
}

#[test]
fn test_populate_builds_mappings() {
    let registry = DeviceDescriptor::from_yaml_str(K20_YAML)
        .unwrap()
        .populate()
        .unwrap();

    let ptc1 = registry.find_pin("PTC1").unwrap();
    let labels: Vec<(MuxSelection, String)> = registry
        .mappings_for_pin(ptc1)
        .map(|m| (m.mux, registry.function_list_label(m)))
        .collect();
    assert_eq!(
        labels,
        vec![
            (MuxSelection::Reset, "ADC0_SE15".to_string()),
            (MuxSelection::Mux(0), "ADC0_SE15".to_string()),
            (MuxSelection::Mux(1), "GPIOC_1/LLWU_P6".to_string()),
            (MuxSelection::Mux(4), "FTM0_CH0".to_string()),
        ]
    );

    let pin = registry.pin(ptc1).unwrap();
    assert_eq!(pin.reset_value(), Some(MuxSelection::Reset));
    assert_eq!(pin.default_value(), Some(MuxSelection::Mux(4)));

    // No reset column maps the Disabled sentinel.
    let pta1 = registry.find_pin("PTA1").unwrap();
    let reset = registry.mappings_for_pin(pta1).next().unwrap();
    assert_eq!(reset.mux, MuxSelection::Reset);
    assert_eq!(reset.functions, vec![FunctionId::DISABLED]);
    assert_eq!(registry.pin(pta1).unwrap().reset_value(), Some(MuxSelection::Reset));
}

#[test]
fn test_reset_only_pin_is_fixed() {
    let registry = DeviceDescriptor::from_yaml_str(K20_YAML)
        .unwrap()
        .populate()
        .unwrap();
    let dp0 = registry.find_pin("ADC0_DP0").unwrap();
    let mappings: Vec<_> = registry.mappings_for_pin(dp0).collect();
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].mux, MuxSelection::Fixed);
    assert_eq!(registry.pin(dp0).unwrap().reset_value(), Some(MuxSelection::Fixed));

    // ADC0_DP0 has no template and lands in the miscellaneous family.
    let function = registry.find_peripheral_function("ADC0_DP0").unwrap();
    let template = registry.function(function).unwrap().template.unwrap();
    assert_eq!(registry.template(template).unwrap().base_name(), "Misc");
}

#[test]
fn test_populate_metadata() {
    let registry = DeviceDescriptor::from_yaml_str(K20_YAML)
        .unwrap()
        .populate()
        .unwrap();

    let ftm0 = registry.template(registry.find_template("Ftm0").unwrap()).unwrap();
    assert_eq!(ftm0.clock_reg(), Some("SCGC6"));
    assert_eq!(ftm0.clock_mask(), Some("SIM_SCGC6_FTM0_MASK"));
    assert_eq!(ftm0.irq_nums(), &["FTM0_IRQn".to_string()]);

    let device = registry.find_device("MK20DX128VLH5").unwrap();
    assert_eq!(device.package, "LQFP64");
    assert_eq!(registry.dma_info().len(), 1);
    assert_eq!(registry.dma_info()[0].dma_source, "FTM0_CH0");

    let package = registry.find_device_package("LQFP64").unwrap();
    assert_eq!(package.location("PTC1"), Some("44"));
    assert_eq!(package.location("PTA1"), Some("PTA1"));
    assert_eq!(package.location("PTB0"), None);
}

#[test]
fn test_populated_registry_emits_choices() {
    let registry = DeviceDescriptor::from_yaml_str(K20_YAML)
        .unwrap()
        .populate()
        .unwrap();
    let ftm0 = registry.find_template("Ftm0").unwrap();
    let package = registry.find_device_package("LQFP64").unwrap();
    let records = emit_info_table(&registry, ftm0, package).unwrap();

    // PTC1 and PTA1 are bonded, PTB0 is not.
    let choices = records
        .iter()
        .filter(|r| matches!(r.guard, muxgen_core::Guard::Choice { .. }))
        .count();
    assert_eq!(choices, 2);
}

#[test]
fn test_duplicate_pin_is_reported_with_context() {
    let yaml = r#"
pins:
  - name: PTA1
  - name: PTA1
"#;
    let err = DeviceDescriptor::from_yaml_str(yaml)
        .unwrap()
        .populate()
        .unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("pin PTA1"), "{}", message);
    assert!(message.contains("Pin PTA1 already exists"), "{}", message);
}

#[test]
fn test_invalid_clock_register() {
    let yaml = r#"
pins: []
peripherals:
  - name: FTM0
    clock_reg: SCGC6
"#;
    let err = DeviceDescriptor::from_yaml_str(yaml)
        .unwrap()
        .populate()
        .unwrap_err();
    assert!(format!("{:#}", err).contains("peripheral FTM0"));
}

#[test]
fn test_from_file_json_and_yaml() {
    let dir = tempfile::tempdir().unwrap();

    let yaml_path = dir.path().join("k20.yaml");
    std::fs::write(&yaml_path, K20_YAML).unwrap();
    let from_yaml = DeviceDescriptor::from_file(&yaml_path).unwrap();

    let json_path = dir.path().join("k20.json");
    let mut file = std::fs::File::create(&json_path).unwrap();
    file.write_all(serde_json::to_string(&from_yaml).unwrap().as_bytes())
        .unwrap();
    let from_json = DeviceDescriptor::from_file(&json_path).unwrap();
    assert_eq!(from_json.pins.len(), from_yaml.pins.len());
    assert_eq!(from_json.family.as_deref(), Some("MK20D5"));

    assert!(DeviceDescriptor::from_file(dir.path().join("missing.yaml")).is_err());
}
