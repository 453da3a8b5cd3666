//! Fixed suggestion lists offered for each field.

// Büromanagement

pub const LERNFELDER_BUERO: &[&str] = &[
    "LF 1 Die eigene Rolle im Betrieb mitgestalten",
    "LF 2 Büroprozesse und Arbeitsorganisation",
    "LF 3 Informationsmanagement & Kommunikation",
    "LF 4 Auftragsbearbeitung & Beschaffung",
    "LF 5 Kundenorientierte Auftragsabwicklung",
    "LF 6 Personalwirtschaftliche Aufgaben unterstützen",
    "LF 7 Kaufmännische Steuerung & Kontrolle",
    "LF 8 Marketing & Veranstaltungsorganisation",
    "LF 9 Projekt- und Prozessmanagement",
    "LF 10 Qualitätsmanagement & Dokumentation",
];

pub const SCHWERPUNKTE_BERUFSVORBEREITUNG: &[&str] = &[
    "Grundlagen Bürokommunikation",
    "Arbeitsorganisation & Zeitmanagement",
    "Digitale Grundkompetenzen (Office/Cloud)",
    "Kaufmännische Basisprozesse",
    "Bewerbung/Profil/ProfilPass",
];

pub const TAETIGKEITEN: &[&str] = &[
    "Posteingang/-ausgang bearbeiten",
    "Telefonate & Terminmanagement",
    "E-Mail-Korrespondenz",
    "Protokolle/Notizen erstellen",
    "Bestellungen/Angebote vergleichen",
    "Rechnungsprüfung/Vorkontierung",
    "Ablage/Dokumentenmanagement",
    "Datenpflege (CRM/Listen)",
    "Vorbereitung Besprechungen/Events",
    "Reisekosten vorbereiten/prüfen",
];

pub const TOOLS: &[&str] = &[
    "MS Word",
    "MS Excel",
    "MS PowerPoint",
    "MS Outlook",
    "MS Teams",
    "SharePoint/OneDrive",
    "SAP/ERP (allgemein)",
    "DATEV (allgemein)",
    "CRM-Tool (allgemein)",
];

pub const KOMPETENZEN: &[&str] = &[
    "Kommunikation (intern/extern)",
    "Selbstorganisation & Priorisierung",
    "Sorgfalt/Genauigkeit",
    "Kaufmännisches Grundverständnis",
    "Digitale Zusammenarbeit",
    "Dokumentation & Nachvollziehbarkeit",
    "Service- & Kundenorientierung",
];

pub const NACHWEISE: &[&str] = &[
    "Dokumente/Dateien (Ablage/Versionierung)",
    "E-Mails/Protokolle",
    "Checklisten/Formulare",
    "Belege/Rechnungen",
    "Auswertungen/Listen",
    "Screenshots (ohne personenbezogene Daten)",
];

pub const BERUFSSCHULE: &[&str] = &[
    "Deutsch/Wirtschaftskommunikation",
    "WiSo (Wirtschaft/Soziales)",
    "Rechnungswesen/Controlling",
    "Informationsverarbeitung (Text/Tabellen)",
    "Projektarbeit",
];

/// Exercise pool printed verbatim into every exam prompt.
pub const PRUEFUNGSUEBUNGEN: &[&str] = &[
    "Kaufmännische Fälle (Ein-/Ausgangsrechnungen, Skonto, Rabatt)",
    "Korrespondenz (Anfrage/Angebot/Reklamation)",
    "Termin- & Ressourcenplanung (Outlook/Teams)",
    "Informationsrecherche & -aufbereitung",
    "Kurzprojekt Organisation (Meeting/Event)",
];

// Metallhandwerk

pub const AUSBILDUNGSBERUFE_METALL: &[&str] = &[
    "Industriemechaniker:in",
    "Zerspanungsmechaniker:in",
    "Konstruktionsmechaniker:in",
    "Werkzeugmechaniker:in",
    "Metallbauer:in Fachr. Konstruktionstechnik",
    "Feinwerkmechaniker:in",
    "Mechatroniker:in",
];

pub const AUSBILDUNGSJAHRE: &[&str] = &["1", "2", "3", "4"];

pub const LERNORTE: &[&str] = &["Betrieb", "ÜBA", "Berufsschule", "Prüfungsvorbereitung"];

pub const AUFGABENTYPEN: &[&str] = &[
    "Arbeitsauftrag erstellen",
    "CNC-Programm unterstützen",
    "Schweißaufgabe planen",
    "Werkstück fertigen",
    "Fehlersuche durchführen",
    "Qualitätsprüfung planen",
    "Wartung planen",
];

pub const SPRACHEN: &[&str] = &["Deutsch", "Englisch"];

pub const TON: &[&str] = &[
    "klar & knapp",
    "instruktiv & geduldig",
    "prüfungsnah & formal",
    "kollegial & motivierend",
];

pub const VERFAHREN: &[&str] = &[
    "Drehen",
    "Fräsen",
    "Bohren",
    "Schleifen",
    "Sägen",
    "Biegen",
    "Schweißen MAG",
    "Schweißen WIG/TIG",
    "CNC (Sinumerik)",
    "CNC (Heidenhain)",
    "CAM",
    "3D-Druck (Metall)",
    "Montage",
    "Instandhaltung",
];

pub const MASCHINEN: &[&str] = &[
    "Konventionelle Drehmaschine",
    "CNC-Drehmaschine",
    "Konventionelle Fräsmaschine",
    "CNC-Fräsmaschine",
    "Schweißgerät MAG",
    "Schweißgerät WIG/TIG",
    "Bandsäge",
    "Bohrmaschine Ständer",
    "Flachschleifmaschine",
];

pub const WERKSTOFFE: &[&str] = &[
    "C45E",
    "S235JR",
    "S355",
    "1.4301 (V2A)",
    "1.4404 (V4A)",
    "AlMg3",
    "GG25",
    "42CrMo4",
];

pub const NORMEN: &[&str] = &[
    "DIN ISO 2768 (Toleranzen)",
    "DIN EN ISO 1101 (Form-/Lagetoleranzen)",
    "DIN EN ISO 1302 (Oberflächenangaben)",
    "DIN EN ISO 9606-1 (Schweißen – Prüfungen)",
    "DGUV Vorschrift 1 (Sicherheit)",
    "Betriebsanweisung Maschine",
];

pub const MESSMITTEL: &[&str] = &[
    "Messschieber 0–150 mm",
    "Mikrometer 0–25 mm",
    "Höhenreißer",
    "Innenmessgerät",
    "Rauheitsmessgerät",
    "Winkelmesser",
    "Grenzlehrdorn",
    "Parallelendmaße",
];

pub const SICHERHEIT: &[&str] = &[
    "PSA: Schutzbrille, Handschuhe",
    "Gefährdungsbeurteilung",
    "Sperrbereiche",
    "Brandgefahr",
    "Späne/Quetschstellen",
    "Schweißrauchabsaugung",
];

pub const DIDAKTIK: &[&str] = &[
    "4-Stufen-Methode",
    "Leittextmethode",
    "Projektarbeit",
    "Lernaufgabe",
    "Peer-Learning",
];

pub const OUTPUTFORMATE: &[&str] = &[
    "Schritt-für-Schritt-Anleitung",
    "Arbeitsplan/Rüstplan Tabelle",
    "Checkliste Sicherheit",
    "CNC-Beispiel (kommentiert)",
    "Quiz (10 Fragen, gemischt)",
    "Fehlerkatalog (Ursache→Maßnahme)",
    "Berichtsheft-Eintrag",
    "Bewertungsschema (Rubrik)",
];
