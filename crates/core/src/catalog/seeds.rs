//! Placeholder catalog data. Stands in for a distributor database.

use rust_decimal::Decimal;

use super::types::{
    Category, CategoryFacets, Chip, DistributorOffer, KeyParameter, Lifecycle, OrderDetails,
    ParameterFacet, PriceBreak,
};
use crate::suggestions::{SuggestionEntry, SuggestionKind};

/// Seed prices are stored in thousandths of a currency unit.
const PRICE_SCALE: u32 = 3;

#[derive(Debug, Clone, Copy)]
struct ChipSeed {
    id: &'static str,
    part_number: &'static str,
    name: &'static str,
    manufacturer: &'static str,
    category_id: &'static str,
    package: &'static str,
    description: &'static str,
    parameters: &'static [(&'static str, &'static str)],
    lifecycle: Lifecycle,
    alternative_ids: &'static [&'static str],
}

const CHIP_SEEDS: &[ChipSeed] = &[
    ChipSeed {
        id: "stm32f407vgt6",
        part_number: "STM32F407VGT6",
        name: "STM32F407 ARM Cortex-M4 MCU",
        manufacturer: "STMicroelectronics",
        category_id: "microcontrollers",
        package: "LQFP-100",
        description: "168 MHz Cortex-M4 with FPU, 1 MB Flash, 192 KB RAM, Ethernet and USB OTG",
        parameters: &[
            ("core", "Cortex-M4"),
            ("voltage", "3.3V"),
            ("flash", "1MB"),
            ("frequency", "168MHz"),
        ],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["gd32f407vgt6", "stm32f103c8t6"],
    },
    ChipSeed {
        id: "stm32f103c8t6",
        part_number: "STM32F103C8T6",
        name: "STM32F103 ARM Cortex-M3 MCU",
        manufacturer: "STMicroelectronics",
        category_id: "microcontrollers",
        package: "LQFP-48",
        description: "72 MHz Cortex-M3, 64 KB Flash, 20 KB RAM, USB full-speed and CAN",
        parameters: &[
            ("core", "Cortex-M3"),
            ("voltage", "3.3V"),
            ("flash", "64KB"),
            ("frequency", "72MHz"),
        ],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["gd32f103c8t6", "rp2040"],
    },
    ChipSeed {
        id: "gd32f407vgt6",
        part_number: "GD32F407VGT6",
        name: "GD32F407 ARM Cortex-M4 MCU",
        manufacturer: "GigaDevice",
        category_id: "microcontrollers",
        package: "LQFP-100",
        description: "Pin-compatible Cortex-M4 alternative running at 168 MHz with 1 MB Flash",
        parameters: &[
            ("core", "Cortex-M4"),
            ("voltage", "3.3V"),
            ("flash", "1MB"),
            ("frequency", "168MHz"),
        ],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["stm32f407vgt6"],
    },
    ChipSeed {
        id: "gd32f103c8t6",
        part_number: "GD32F103C8T6",
        name: "GD32F103 ARM Cortex-M3 MCU",
        manufacturer: "GigaDevice",
        category_id: "microcontrollers",
        package: "LQFP-48",
        description: "Pin-compatible Cortex-M3 alternative running at 108 MHz with 64 KB Flash",
        parameters: &[
            ("core", "Cortex-M3"),
            ("voltage", "3.3V"),
            ("flash", "64KB"),
            ("frequency", "108MHz"),
        ],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["stm32f103c8t6"],
    },
    ChipSeed {
        id: "atmega328p-au",
        part_number: "ATMEGA328P-AU",
        name: "ATmega328P 8-bit AVR MCU",
        manufacturer: "Microchip Technology",
        category_id: "microcontrollers",
        package: "TQFP-32",
        description: "20 MHz 8-bit AVR with 32 KB Flash, the MCU behind the Arduino Uno",
        parameters: &[
            ("core", "AVR"),
            ("voltage", "5V"),
            ("flash", "32KB"),
            ("frequency", "20MHz"),
        ],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["stm32f103c8t6", "rp2040"],
    },
    ChipSeed {
        id: "rp2040",
        part_number: "RP2040",
        name: "RP2040 Dual Cortex-M0+ MCU",
        manufacturer: "Raspberry Pi",
        category_id: "microcontrollers",
        package: "QFN-56",
        description: "Dual-core Cortex-M0+ at 133 MHz, 264 KB SRAM, programmable I/O blocks",
        parameters: &[
            ("core", "Cortex-M0+"),
            ("voltage", "3.3V"),
            ("flash", "External"),
            ("frequency", "133MHz"),
        ],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["stm32f103c8t6"],
    },
    ChipSeed {
        id: "esp32-wroom-32e",
        part_number: "ESP32-WROOM-32E",
        name: "ESP32 Wi-Fi and Bluetooth Module",
        manufacturer: "Espressif",
        category_id: "wireless",
        package: "Module",
        description: "Dual-core Xtensa LX6 at 240 MHz with 2.4 GHz Wi-Fi and Bluetooth LE",
        parameters: &[("core", "Xtensa LX6"), ("voltage", "3.3V"), ("protocol", "Wi-Fi/BLE")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["nrf52840"],
    },
    ChipSeed {
        id: "nrf52840",
        part_number: "NRF52840-QIAA",
        name: "nRF52840 Bluetooth 5 SoC",
        manufacturer: "Nordic Semiconductor",
        category_id: "wireless",
        package: "aQFN-73",
        description: "Cortex-M4F at 64 MHz with Bluetooth 5, Thread and Zigbee radio",
        parameters: &[("core", "Cortex-M4"), ("voltage", "3.3V"), ("protocol", "BLE/Thread")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["esp32-wroom-32e"],
    },
    ChipSeed {
        id: "lm317t",
        part_number: "LM317T",
        name: "LM317 Adjustable Linear Regulator",
        manufacturer: "Texas Instruments",
        category_id: "ldo-regulators",
        package: "TO-220",
        description: "1.25 V to 37 V adjustable positive linear regulator, 1.5 A output",
        parameters: &[("voltage", "Adjustable"), ("current", "1.5A")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["ams1117-3.3"],
    },
    ChipSeed {
        id: "ams1117-3.3",
        part_number: "AMS1117-3.3",
        name: "AMS1117 3.3V LDO Regulator",
        manufacturer: "Advanced Monolithic Systems",
        category_id: "ldo-regulators",
        package: "SOT-223",
        description: "Fixed 3.3 V low-dropout regulator, 1 A output, 1.3 V dropout",
        parameters: &[("voltage", "3.3V"), ("current", "1A")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["tlv70033", "lm317t"],
    },
    ChipSeed {
        id: "tlv70033",
        part_number: "TLV70033DDCR",
        name: "TLV700 3.3V Low-Iq LDO",
        manufacturer: "Texas Instruments",
        category_id: "ldo-regulators",
        package: "SOT-23-5",
        description: "Fixed 3.3 V, 200 mA LDO with 31 uA quiescent current for battery designs",
        parameters: &[("voltage", "3.3V"), ("current", "200mA")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["ams1117-3.3"],
    },
    ChipSeed {
        id: "tps563200",
        part_number: "TPS563200DDCR",
        name: "TPS563200 3A Synchronous Buck Converter",
        manufacturer: "Texas Instruments",
        category_id: "dc-dc-converters",
        package: "SOT-23-6",
        description: "4.5 V to 17 V input, 3 A synchronous step-down converter",
        parameters: &[("voltage", "Adjustable"), ("current", "3A")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["mp1584en"],
    },
    ChipSeed {
        id: "mp1584en",
        part_number: "MP1584EN-LF-Z",
        name: "MP1584 3A Step-Down Converter",
        manufacturer: "Monolithic Power Systems",
        category_id: "dc-dc-converters",
        package: "SOIC-8",
        description: "4.5 V to 28 V input, 3 A, 1.5 MHz step-down converter",
        parameters: &[("voltage", "Adjustable"), ("current", "3A")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["tps563200"],
    },
    ChipSeed {
        id: "ne555p",
        part_number: "NE555P",
        name: "NE555 Precision Timer",
        manufacturer: "Texas Instruments",
        category_id: "timers",
        package: "DIP-8",
        description: "Single bipolar timer for astable and monostable operation",
        parameters: &[("voltage", "5V")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &[],
    },
    ChipSeed {
        id: "lm358dr",
        part_number: "LM358DR",
        name: "LM358 Dual Operational Amplifier",
        manufacturer: "Texas Instruments",
        category_id: "op-amps",
        package: "SOIC-8",
        description: "Dual general-purpose op-amp, single supply 3 V to 32 V",
        parameters: &[("voltage", "5V"), ("channels", "2")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["mcp6002"],
    },
    ChipSeed {
        id: "mcp6002",
        part_number: "MCP6002-I/SN",
        name: "MCP6002 Rail-to-Rail Op-Amp",
        manufacturer: "Microchip Technology",
        category_id: "op-amps",
        package: "SOIC-8",
        description: "Dual 1 MHz rail-to-rail input/output op-amp, 1.8 V to 6 V supply",
        parameters: &[("voltage", "3.3V"), ("channels", "2")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["lm358dr"],
    },
    ChipSeed {
        id: "bme280",
        part_number: "BME280",
        name: "BME280 Environmental Sensor",
        manufacturer: "Bosch Sensortec",
        category_id: "sensors",
        package: "LGA-8",
        description: "Combined humidity, pressure and temperature sensor with I2C and SPI",
        parameters: &[("voltage", "3.3V"), ("interface", "I2C/SPI")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &[],
    },
    ChipSeed {
        id: "lis3dh",
        part_number: "LIS3DHTR",
        name: "LIS3DH 3-Axis Accelerometer",
        manufacturer: "STMicroelectronics",
        category_id: "sensors",
        package: "LGA-16",
        description: "Ultra-low-power 3-axis MEMS accelerometer, +/-2g to +/-16g",
        parameters: &[("voltage", "3.3V"), ("interface", "I2C/SPI")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["mpu-6050"],
    },
    ChipSeed {
        id: "mpu-6050",
        part_number: "MPU-6050",
        name: "MPU-6050 6-Axis Motion Tracking Device",
        manufacturer: "TDK InvenSense",
        category_id: "sensors",
        package: "QFN-24",
        description: "3-axis gyroscope and 3-axis accelerometer with digital motion processor",
        parameters: &[("voltage", "3.3V"), ("interface", "I2C")],
        lifecycle: Lifecycle::Nrnd,
        alternative_ids: &["lis3dh"],
    },
    ChipSeed {
        id: "ch340g",
        part_number: "CH340G",
        name: "CH340G USB to UART Bridge",
        manufacturer: "WCH",
        category_id: "interface",
        package: "SOP-16",
        description: "Full-speed USB to serial UART converter with modem signals",
        parameters: &[("voltage", "5V"), ("interface", "USB/UART")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["cp2102n"],
    },
    ChipSeed {
        id: "cp2102n",
        part_number: "CP2102N-A02-GQFN28R",
        name: "CP2102N USB to UART Bridge",
        manufacturer: "Silicon Labs",
        category_id: "interface",
        package: "QFN-28",
        description: "USB 2.0 full-speed to UART bridge with integrated oscillator",
        parameters: &[("voltage", "3.3V"), ("interface", "USB/UART")],
        lifecycle: Lifecycle::Active,
        alternative_ids: &["ch340g"],
    },
];

#[derive(Debug, Clone, Copy)]
struct ParameterFacetSeed {
    name: &'static str,
    values: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
struct CategorySeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    parent_id: Option<&'static str>,
    chip_count: u32,
    brands: &'static [&'static str],
    packages: &'static [&'static str],
    parameters: &'static [ParameterFacetSeed],
}

const CATEGORY_SEEDS: &[CategorySeed] = &[
    CategorySeed {
        id: "microcontrollers",
        name: "Microcontrollers",
        description: "8-bit, 16-bit and 32-bit MCUs",
        parent_id: None,
        chip_count: 4820,
        brands: &["STMicroelectronics", "GigaDevice", "Microchip Technology", "Raspberry Pi"],
        packages: &["LQFP-48", "LQFP-100", "TQFP-32", "QFN-56"],
        parameters: &[
            ParameterFacetSeed {
                name: "core",
                values: &["Cortex-M0+", "Cortex-M3", "Cortex-M4", "AVR"],
            },
            ParameterFacetSeed { name: "voltage", values: &["3.3V", "5V"] },
            ParameterFacetSeed { name: "flash", values: &["32KB", "64KB", "1MB", "External"] },
        ],
    },
    CategorySeed {
        id: "wireless",
        name: "Wireless Modules",
        description: "Wi-Fi, Bluetooth and Thread SoCs and certified modules",
        parent_id: None,
        chip_count: 1260,
        brands: &["Espressif", "Nordic Semiconductor"],
        packages: &["Module", "aQFN-73"],
        parameters: &[ParameterFacetSeed { name: "protocol", values: &["Wi-Fi/BLE", "BLE/Thread"] }],
    },
    CategorySeed {
        id: "power-management",
        name: "Power Management",
        description: "Linear regulators, DC-DC converters and power monitors",
        parent_id: None,
        chip_count: 6930,
        brands: &["Texas Instruments", "Advanced Monolithic Systems", "Monolithic Power Systems"],
        packages: &["SOT-23-5", "SOT-23-6", "SOT-223", "TO-220", "SOIC-8"],
        parameters: &[
            ParameterFacetSeed { name: "voltage", values: &["3.3V", "5V", "Adjustable"] },
            ParameterFacetSeed { name: "current", values: &["200mA", "1A", "1.5A", "3A"] },
        ],
    },
    CategorySeed {
        id: "ldo-regulators",
        name: "LDO Regulators",
        description: "Low-dropout and adjustable linear regulators",
        parent_id: Some("power-management"),
        chip_count: 2140,
        brands: &["Texas Instruments", "Advanced Monolithic Systems"],
        packages: &["SOT-23-5", "SOT-223", "TO-220"],
        parameters: &[
            ParameterFacetSeed { name: "voltage", values: &["3.3V", "5V", "Adjustable"] },
            ParameterFacetSeed { name: "current", values: &["200mA", "1A", "1.5A"] },
        ],
    },
    CategorySeed {
        id: "dc-dc-converters",
        name: "DC-DC Converters",
        description: "Buck, boost and buck-boost switching regulators",
        parent_id: Some("power-management"),
        chip_count: 3310,
        brands: &["Texas Instruments", "Monolithic Power Systems"],
        packages: &["SOT-23-6", "SOIC-8"],
        parameters: &[ParameterFacetSeed { name: "current", values: &["1A", "3A"] }],
    },
    CategorySeed {
        id: "analog",
        name: "Analog",
        description: "Amplifiers, comparators and timers",
        parent_id: None,
        chip_count: 5120,
        brands: &["Texas Instruments", "Microchip Technology"],
        packages: &["SOIC-8", "DIP-8"],
        parameters: &[ParameterFacetSeed { name: "voltage", values: &["3.3V", "5V"] }],
    },
    CategorySeed {
        id: "op-amps",
        name: "Operational Amplifiers",
        description: "General-purpose and rail-to-rail op-amps",
        parent_id: Some("analog"),
        chip_count: 2280,
        brands: &["Texas Instruments", "Microchip Technology"],
        packages: &["SOIC-8"],
        parameters: &[ParameterFacetSeed { name: "channels", values: &["1", "2", "4"] }],
    },
    CategorySeed {
        id: "timers",
        name: "Timers & Oscillators",
        description: "555 timers and programmable oscillators",
        parent_id: Some("analog"),
        chip_count: 410,
        brands: &["Texas Instruments"],
        packages: &["DIP-8", "SOIC-8"],
        parameters: &[],
    },
    CategorySeed {
        id: "sensors",
        name: "Sensors",
        description: "Motion, environmental and position sensors",
        parent_id: None,
        chip_count: 3870,
        brands: &["Bosch Sensortec", "STMicroelectronics", "TDK InvenSense"],
        packages: &["LGA-8", "LGA-16", "QFN-24"],
        parameters: &[ParameterFacetSeed { name: "interface", values: &["I2C", "I2C/SPI"] }],
    },
    CategorySeed {
        id: "interface",
        name: "Interface",
        description: "USB bridges, transceivers and level shifters",
        parent_id: None,
        chip_count: 1940,
        brands: &["WCH", "Silicon Labs"],
        packages: &["SOP-16", "QFN-28"],
        parameters: &[ParameterFacetSeed { name: "interface", values: &["USB/UART"] }],
    },
];

#[derive(Debug, Clone, Copy)]
struct OfferSeed {
    distributor: &'static str,
    sku: &'static str,
    stock: u32,
    price_breaks: &'static [(u32, i64)],
}

#[derive(Debug, Clone, Copy)]
struct OrderSeed {
    chip_id: &'static str,
    min_order_quantity: u32,
    lead_time_weeks: u32,
    offers: &'static [OfferSeed],
}

const ORDER_SEEDS: &[OrderSeed] = &[
    OrderSeed {
        chip_id: "stm32f407vgt6",
        min_order_quantity: 1,
        lead_time_weeks: 12,
        offers: &[
            OfferSeed {
                distributor: "Mouser",
                sku: "511-STM32F407VGT6",
                stock: 4_210,
                price_breaks: &[(1, 11_870), (10, 10_680), (100, 9_120)],
            },
            OfferSeed {
                distributor: "LCSC",
                sku: "C44440",
                stock: 12_560,
                price_breaks: &[(1, 9_450), (10, 8_730), (100, 8_020)],
            },
        ],
    },
    OrderSeed {
        chip_id: "stm32f103c8t6",
        min_order_quantity: 1,
        lead_time_weeks: 10,
        offers: &[
            OfferSeed {
                distributor: "Digi-Key",
                sku: "497-6063-ND",
                stock: 8_930,
                price_breaks: &[(1, 5_020), (10, 4_510), (100, 3_680)],
            },
            OfferSeed {
                distributor: "LCSC",
                sku: "C8734",
                stock: 36_800,
                price_breaks: &[(1, 2_890), (10, 2_510), (100, 2_190)],
            },
        ],
    },
    OrderSeed {
        chip_id: "gd32f407vgt6",
        min_order_quantity: 5,
        lead_time_weeks: 8,
        offers: &[OfferSeed {
            distributor: "LCSC",
            sku: "C80683",
            stock: 3_120,
            price_breaks: &[(5, 5_370), (50, 4_890)],
        }],
    },
    OrderSeed {
        chip_id: "gd32f103c8t6",
        min_order_quantity: 5,
        lead_time_weeks: 6,
        offers: &[OfferSeed {
            distributor: "LCSC",
            sku: "C77994",
            stock: 21_400,
            price_breaks: &[(5, 1_730), (50, 1_520)],
        }],
    },
    OrderSeed {
        chip_id: "atmega328p-au",
        min_order_quantity: 1,
        lead_time_weeks: 14,
        offers: &[OfferSeed {
            distributor: "Mouser",
            sku: "556-ATMEGA328P-AU",
            stock: 2_470,
            price_breaks: &[(1, 2_890), (25, 2_410), (100, 2_190)],
        }],
    },
    OrderSeed {
        chip_id: "rp2040",
        min_order_quantity: 1,
        lead_time_weeks: 4,
        offers: &[OfferSeed {
            distributor: "Digi-Key",
            sku: "2648-SC0914(13)CT-ND",
            stock: 51_000,
            price_breaks: &[(1, 800), (10, 750), (100, 700)],
        }],
    },
    OrderSeed {
        chip_id: "esp32-wroom-32e",
        min_order_quantity: 1,
        lead_time_weeks: 6,
        offers: &[
            OfferSeed {
                distributor: "Mouser",
                sku: "356-ESP32WRM32E132PH",
                stock: 6_840,
                price_breaks: &[(1, 3_800), (10, 3_420), (100, 3_100)],
            },
            OfferSeed {
                distributor: "LCSC",
                sku: "C701341",
                stock: 18_300,
                price_breaks: &[(1, 3_150), (10, 2_960)],
            },
        ],
    },
    OrderSeed {
        chip_id: "nrf52840",
        min_order_quantity: 1,
        lead_time_weeks: 16,
        offers: &[OfferSeed {
            distributor: "Digi-Key",
            sku: "1490-1071-1-ND",
            stock: 1_920,
            price_breaks: &[(1, 6_640), (10, 5_980), (100, 5_210)],
        }],
    },
    OrderSeed {
        chip_id: "lm317t",
        min_order_quantity: 1,
        lead_time_weeks: 6,
        offers: &[OfferSeed {
            distributor: "Mouser",
            sku: "595-LM317T",
            stock: 14_300,
            price_breaks: &[(1, 820), (10, 610), (100, 430)],
        }],
    },
    OrderSeed {
        chip_id: "ams1117-3.3",
        min_order_quantity: 10,
        lead_time_weeks: 3,
        offers: &[OfferSeed {
            distributor: "LCSC",
            sku: "C6186",
            stock: 412_000,
            price_breaks: &[(10, 90), (100, 60), (1000, 45)],
        }],
    },
    OrderSeed {
        chip_id: "tlv70033",
        min_order_quantity: 1,
        lead_time_weeks: 8,
        offers: &[OfferSeed {
            distributor: "Digi-Key",
            sku: "296-32413-1-ND",
            stock: 22_900,
            price_breaks: &[(1, 390), (10, 290), (100, 180)],
        }],
    },
    OrderSeed {
        chip_id: "tps563200",
        min_order_quantity: 1,
        lead_time_weeks: 9,
        offers: &[OfferSeed {
            distributor: "Mouser",
            sku: "595-TPS563200DDCR",
            stock: 9_460,
            price_breaks: &[(1, 1_020), (10, 880), (100, 640)],
        }],
    },
    OrderSeed {
        chip_id: "ne555p",
        min_order_quantity: 1,
        lead_time_weeks: 5,
        offers: &[OfferSeed {
            distributor: "Digi-Key",
            sku: "296-1411-5-ND",
            stock: 31_700,
            price_breaks: &[(1, 530), (10, 420), (100, 290)],
        }],
    },
    OrderSeed {
        chip_id: "lm358dr",
        min_order_quantity: 1,
        lead_time_weeks: 5,
        offers: &[OfferSeed {
            distributor: "LCSC",
            sku: "C7950",
            stock: 98_200,
            price_breaks: &[(1, 120), (100, 80)],
        }],
    },
    OrderSeed {
        chip_id: "bme280",
        min_order_quantity: 1,
        lead_time_weeks: 18,
        offers: &[OfferSeed {
            distributor: "Mouser",
            sku: "262-BME280",
            stock: 1_370,
            price_breaks: &[(1, 5_600), (10, 5_130), (100, 4_480)],
        }],
    },
    OrderSeed {
        chip_id: "ch340g",
        min_order_quantity: 5,
        lead_time_weeks: 4,
        offers: &[OfferSeed {
            distributor: "LCSC",
            sku: "C14267",
            stock: 67_500,
            price_breaks: &[(5, 450), (50, 390), (500, 330)],
        }],
    },
];

#[derive(Debug, Clone, Copy)]
struct SuggestionSeed {
    id: &'static str,
    text: &'static str,
    kind: SuggestionKind,
    category: Option<&'static str>,
    count: Option<u32>,
    description: Option<&'static str>,
    brand: Option<&'static str>,
}

const SUGGESTION_SEEDS: &[SuggestionSeed] = &[
    SuggestionSeed {
        id: "popular-stm32f407",
        text: "STM32F407",
        kind: SuggestionKind::Popular,
        category: Some("Microcontrollers"),
        count: Some(15_420),
        description: Some("ARM Cortex-M4 MCU, 168MHz, 1MB Flash"),
        brand: Some("STMicroelectronics"),
    },
    SuggestionSeed {
        id: "popular-esp32",
        text: "ESP32-WROOM-32E",
        kind: SuggestionKind::Popular,
        category: Some("Wireless Modules"),
        count: Some(12_850),
        description: Some("Wi-Fi and Bluetooth combo module"),
        brand: Some("Espressif"),
    },
    SuggestionSeed {
        id: "popular-stm32f103",
        text: "STM32F103",
        kind: SuggestionKind::Popular,
        category: Some("Microcontrollers"),
        count: Some(11_230),
        description: Some("ARM Cortex-M3 MCU, 72MHz, 64KB Flash"),
        brand: Some("STMicroelectronics"),
    },
    SuggestionSeed {
        id: "popular-atmega328p",
        text: "ATmega328P",
        kind: SuggestionKind::Popular,
        category: Some("Microcontrollers"),
        count: Some(9_870),
        description: Some("8-bit AVR MCU used on the Arduino Uno"),
        brand: Some("Microchip Technology"),
    },
    SuggestionSeed {
        id: "popular-lm317",
        text: "LM317",
        kind: SuggestionKind::Popular,
        category: Some("Power Management"),
        count: Some(8_640),
        description: Some("Adjustable linear voltage regulator"),
        brand: Some("Texas Instruments"),
    },
    SuggestionSeed {
        id: "popular-ams1117",
        text: "AMS1117-3.3",
        kind: SuggestionKind::Popular,
        category: Some("Power Management"),
        count: Some(7_920),
        description: Some("3.3V 1A low-dropout regulator"),
        brand: Some("Advanced Monolithic Systems"),
    },
    SuggestionSeed {
        id: "popular-ne555",
        text: "NE555",
        kind: SuggestionKind::Popular,
        category: Some("Analog"),
        count: Some(6_480),
        description: Some("Precision timer for pulse and oscillator circuits"),
        brand: Some("Texas Instruments"),
    },
    SuggestionSeed {
        id: "popular-lis3dh",
        text: "LIS3DH",
        kind: SuggestionKind::Popular,
        category: Some("Sensors"),
        count: Some(5_310),
        description: Some("3-axis MEMS accelerometer"),
        brand: Some("STMicroelectronics"),
    },
    SuggestionSeed {
        id: "category-microcontrollers",
        text: "Microcontrollers",
        kind: SuggestionKind::Category,
        category: Some("Microcontrollers"),
        count: Some(4_820),
        description: Some("8-bit, 16-bit and 32-bit MCUs"),
        brand: None,
    },
    SuggestionSeed {
        id: "category-power-management",
        text: "Power Management",
        kind: SuggestionKind::Category,
        category: Some("Power Management"),
        count: Some(6_930),
        description: Some("LDO regulators and DC-DC converters"),
        brand: None,
    },
    SuggestionSeed {
        id: "category-sensors",
        text: "Sensors",
        kind: SuggestionKind::Category,
        category: Some("Sensors"),
        count: Some(3_870),
        description: Some("Motion, environmental and position sensors"),
        brand: None,
    },
    SuggestionSeed {
        id: "category-wireless",
        text: "Wireless Modules",
        kind: SuggestionKind::Category,
        category: Some("Wireless Modules"),
        count: Some(1_260),
        description: Some("Wi-Fi, Bluetooth and Thread connectivity"),
        brand: None,
    },
    SuggestionSeed {
        id: "brand-st",
        text: "STMicroelectronics",
        kind: SuggestionKind::Brand,
        category: None,
        count: None,
        description: Some("STM32 microcontrollers and MEMS sensors"),
        brand: Some("STMicroelectronics"),
    },
    SuggestionSeed {
        id: "brand-ti",
        text: "Texas Instruments",
        kind: SuggestionKind::Brand,
        category: None,
        count: None,
        description: Some("Analog, power management and embedded processing"),
        brand: Some("Texas Instruments"),
    },
    SuggestionSeed {
        id: "brand-espressif",
        text: "Espressif",
        kind: SuggestionKind::Brand,
        category: None,
        count: None,
        description: Some("Low-cost Wi-Fi and Bluetooth SoCs"),
        brand: Some("Espressif"),
    },
    SuggestionSeed {
        id: "brand-microchip",
        text: "Microchip Technology",
        kind: SuggestionKind::Brand,
        category: None,
        count: None,
        description: Some("AVR and PIC microcontrollers, analog and interface"),
        brand: Some("Microchip Technology"),
    },
    SuggestionSeed {
        id: "series-stm32",
        text: "STM32 Series",
        kind: SuggestionKind::Series,
        category: Some("Microcontrollers"),
        count: None,
        description: Some("32-bit ARM Cortex-M MCU family"),
        brand: Some("STMicroelectronics"),
    },
    SuggestionSeed {
        id: "series-esp32",
        text: "ESP32 Series",
        kind: SuggestionKind::Series,
        category: Some("Wireless Modules"),
        count: None,
        description: Some("Wi-Fi and Bluetooth SoC family"),
        brand: Some("Espressif"),
    },
    SuggestionSeed {
        id: "series-tps",
        text: "TPS Series",
        kind: SuggestionKind::Series,
        category: Some("Power Management"),
        count: None,
        description: Some("Switching and linear regulators"),
        brand: Some("Texas Instruments"),
    },
];

/// Shown while a session has no search history of its own.
const RECENT_SEARCH_SEEDS: &[SuggestionSeed] = &[
    SuggestionSeed {
        id: "recent-stm32f407vgt6",
        text: "STM32F407VGT6",
        kind: SuggestionKind::Recent,
        category: Some("Microcontrollers"),
        count: None,
        description: None,
        brand: None,
    },
    SuggestionSeed {
        id: "recent-esp32-wifi-module",
        text: "ESP32 WiFi module",
        kind: SuggestionKind::Recent,
        category: Some("Wireless Modules"),
        count: None,
        description: None,
        brand: None,
    },
    SuggestionSeed {
        id: "recent-ldo-3v3",
        text: "LDO 3.3V",
        kind: SuggestionKind::Recent,
        category: Some("Power Management"),
        count: None,
        description: None,
        brand: None,
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

pub(super) fn build_chips() -> Vec<Chip> {
    CHIP_SEEDS
        .iter()
        .map(|seed| Chip {
            id: seed.id.to_owned(),
            part_number: seed.part_number.to_owned(),
            name: seed.name.to_owned(),
            manufacturer: seed.manufacturer.to_owned(),
            category_id: seed.category_id.to_owned(),
            package: seed.package.to_owned(),
            description: seed.description.to_owned(),
            key_parameters: seed
                .parameters
                .iter()
                .map(|(name, value)| KeyParameter {
                    name: (*name).to_owned(),
                    value: (*value).to_owned(),
                })
                .collect(),
            datasheet_url: format!("https://datasheets.chipscout.dev/{}.pdf", seed.id),
            lifecycle: seed.lifecycle,
            alternative_ids: owned(seed.alternative_ids),
        })
        .collect()
}

pub(super) fn build_categories() -> Vec<Category> {
    CATEGORY_SEEDS
        .iter()
        .map(|seed| Category {
            id: seed.id.to_owned(),
            name: seed.name.to_owned(),
            description: seed.description.to_owned(),
            parent_id: seed.parent_id.map(str::to_owned),
            chip_count: seed.chip_count,
            facets: CategoryFacets {
                brands: owned(seed.brands),
                packages: owned(seed.packages),
                parameters: seed
                    .parameters
                    .iter()
                    .map(|facet| ParameterFacet {
                        name: facet.name.to_owned(),
                        values: owned(facet.values),
                    })
                    .collect(),
            },
        })
        .collect()
}

pub(super) fn build_order_details() -> Vec<OrderDetails> {
    ORDER_SEEDS
        .iter()
        .map(|seed| OrderDetails {
            chip_id: seed.chip_id.to_owned(),
            min_order_quantity: seed.min_order_quantity,
            lead_time_weeks: seed.lead_time_weeks,
            offers: seed
                .offers
                .iter()
                .map(|offer| DistributorOffer {
                    distributor: offer.distributor.to_owned(),
                    sku: offer.sku.to_owned(),
                    stock: offer.stock,
                    currency: "USD".to_owned(),
                    price_breaks: offer
                        .price_breaks
                        .iter()
                        .map(|(quantity, price)| PriceBreak {
                            quantity: *quantity,
                            unit_price: Decimal::new(*price, PRICE_SCALE),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

fn build_entries(seeds: &[SuggestionSeed]) -> Vec<SuggestionEntry> {
    seeds
        .iter()
        .map(|seed| SuggestionEntry {
            id: seed.id.to_owned(),
            text: seed.text.to_owned(),
            kind: seed.kind,
            category: seed.category.map(str::to_owned),
            count: seed.count,
            description: seed.description.map(str::to_owned),
            brand: seed.brand.map(str::to_owned),
        })
        .collect()
}

pub(super) fn build_suggestions() -> Vec<SuggestionEntry> {
    build_entries(SUGGESTION_SEEDS)
}

pub(super) fn build_recent_searches() -> Vec<SuggestionEntry> {
    build_entries(RECENT_SEARCH_SEEDS)
}
