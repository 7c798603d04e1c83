//! Technical term registry: known abbreviations plus structural shapes.

use crate::casing;
use crate::error::Result;
use crate::patterns::PatternSet;
use std::collections::HashSet;

/// Built-in abbreviations, grouped by domain. Lookup is flat.
pub const BUILTIN_TERMS: &[&[&str]] = &[
    // Electronics / computing
    &[
        "ABS", "AC", "DC", "LED", "LCD", "OLED", "RAM", "ROM", "CPU", "GPU", "SSD", "HDD",
        "USB", "HDMI", "VGA", "DVI", "API", "SDK", "IDE", "GUI", "CLI", "OS", "IP", "TCP",
        "UDP", "HTTP", "HTTPS", "FTP", "SSH", "SSL", "TLS", "DNS", "URL", "URI", "JSON",
        "XML", "HTML", "CSS", "JS", "SQL", "AI", "ML", "AR", "VR", "GPS", "WIFI", "LTE",
        "5G", "4G", "3G", "RFID", "NFC", "QR", "OCR", "PDF", "CSV", "PNG", "JPG", "JPEG",
        "GIF", "SVG", "MP3", "MP4", "AVI", "MOV", "WAV", "FLAC",
    ],
    // Semiconductors / materials
    &[
        "CMOS", "BJT", "FET", "MOSFET", "IC", "PCB", "SMD", "THT", "PWM", "ADC", "DAC",
        "PLL", "PID", "EMI", "EMC", "ESD", "RF", "IF", "LF", "HF", "UHF", "VHF", "SMC",
        "CFRP", "GFRP", "FRP", "RTM", "BMC", "GMT", "LFT", "CF", "GF", "PP", "PE", "PA",
        "PC", "POM", "PEEK", "PEI", "PSU", "TPU", "PVC", "SAN", "PBT", "PET",
    ],
    // Business / standards
    &[
        "ISO", "IEEE", "ANSI", "NIST", "FDA", "CE", "FCC", "UL", "REACH", "GDP", "ROI",
        "KPI", "SLA", "CRM", "ERP", "HR", "IT", "QA", "QC", "R&D", "CEO", "CTO", "CFO",
        "COO", "VP", "SVP", "EVP", "MD", "GM", "PM", "BA",
    ],
    // Automotive systems
    &[
        "ACC", "ADAS", "AEB", "AFR", "AGM", "AWD", "BMS", "CAN", "CVT", "DCT", "DPF",
        "DSC", "DSG", "EBD", "ECU", "EGR", "EPS", "ESC", "ESP", "EV", "FCW", "FWD", "HEV",
        "HUD", "ICE", "LDW", "LKAS", "MAF", "MAP", "MIL", "OBDII", "PHEV", "RWD", "SCR",
        "TCU", "TPMS", "TCS", "TSI", "TFSI", "TDI", "VIN", "VSC", "VVT", "VTEC", "V2V",
        "V2X", "V2I", "LIN", "MOST", "TAPS", "CBC", "MKB", "RMI", "CDP",
    ],
    // Automotive components / parts
    &[
        "A/C", "ACM", "BCM", "HVAC", "EGT", "IAT", "O2", "CKP", "CMP", "TPS", "IAC", "PCV",
        "EVAP", "CAT", "DOC", "GPF", "NOX", "TWC", "HEGO", "UEGO", "AFM", "VAF", "BARO",
        "CTS", "ECT", "EOT", "CHT", "MIVEC", "AVCS", "CVVT", "DVVT", "VANOS", "GDI", "FSI",
        "MPFI", "TBI", "PFI", "CDI", "CRDI", "DMF", "SMF", "LSD", "ATF", "MTF", "DEXRON",
        "PDK", "SMG", "AMT", "AGS", "AT", "MT", "IMT", "HGV", "LCV", "SUV", "MPV", "BEV",
    ],
    // Automotive materials
    &[
        "HSS", "AHSS", "UHSS", "BIW", "BIP", "CRP", "RIM", "TPO", "TEO", "PUR", "EPP",
        "PA6", "PA66", "PC/ABS", "ASA", "PMMA", "HDPE", "LDPE", "LLDPE", "EVA", "EPDM",
        "SBR", "NBR", "CR", "NR", "BR", "IIR", "BIIR", "CIIR", "AEM", "ECO", "FKM", "FFKM",
        "VMQ", "FVMQ", "AU", "EU", "HNBR", "CSM", "CPE", "TPE", "TPV", "TPC",
    ],
    // File formats
    &[
        "DOCX", "XLS", "XLSX", "PPT", "PPTX", "TXT", "RTF", "ODT", "ZIP", "RAR", "7Z",
        "TAR", "GZ", "BZ2", "IMG", "DMG", "EXE", "MSI",
    ],
    // Units
    &["V", "A", "W", "MW", "VA", "VAR", "F", "H"],
];

/// Static, case-normalized abbreviation set plus structural matchers.
///
/// Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct TermRegistry {
    terms: HashSet<String>,
    structural: PatternSet,
}

impl TermRegistry {
    /// Registry over the built-in term list.
    pub fn builtin() -> Result<Self> {
        Self::with_terms(BUILTIN_TERMS.iter().flat_map(|group| group.iter().copied()))
    }

    /// Registry over a custom term list. Entries are uppercased.
    pub fn with_terms<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms.into_iter().map(|t| casing::to_upper(t.as_ref())).collect();
        Ok(Self { terms, structural: PatternSet::structural()? })
    }

    /// Uppercased `word` is a listed term.
    pub fn is_known_term(&self, word: &str) -> bool {
        self.terms.contains(&casing::to_upper(word))
    }

    /// Raw `word` has an abbreviation shape.
    pub fn is_structurally_technical(&self, word: &str) -> bool {
        self.structural.is_match(word)
    }

    pub fn is_technical_term(&self, word: &str) -> bool {
        self.is_known_term(word) || self.is_structurally_technical(word)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut sorted: Vec<&str> = self.terms.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.into_iter()
    }
}
