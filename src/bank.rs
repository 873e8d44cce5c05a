//! Question banks for the medical laboratory course, one per section.
//!
//! Each block is `question: <prompt>` followed by a line with the correct
//! answer first and three distractors, comma-separated.

#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    pub slug: &'static str,
    pub title: &'static str,
    pub blocks: &'static [&'static str],
}

pub const HEMATOLOGY: QuestionBank = QuestionBank {
    slug: "hematology",
    title: "Hematology",
    blocks: &[
        "question: Which anticoagulant is preferred for a routine complete blood count?\nEDTA, Sodium citrate, Lithium heparin, Sodium fluoride",
        "question: What is the normal lifespan of a red blood cell?\n120 days, 30 days, 60 days, 7 days",
        "question: Which stain is routinely used for peripheral blood smears?\nWright stain, Gram stain, Ziehl-Neelsen stain, India ink",
        "question: Which white blood cell is most abundant in healthy adult blood?\nNeutrophil, Lymphocyte, Monocyte, Eosinophil",
        "question: Hypersegmented neutrophils are characteristic of which anemia?\nMegaloblastic anemia, Iron deficiency anemia, Sickle cell anemia, Anemia of chronic disease",
        "question: Which index expresses the average volume of a red cell?\nMCV, MCH, MCHC, RDW",
        "question: Auer rods are most associated with which condition?\nAcute myeloid leukemia, Chronic lymphocytic leukemia, Infectious mononucleosis, Hodgkin lymphoma",
        "question: What is the blood-to-anticoagulant ratio in a light blue top coagulation tube?\n9:1, 4:1, 1:1, 10:2",
        "question: Which test monitors unfractionated heparin therapy?\naPTT, PT, Bleeding time, Platelet count",
    ],
};

pub const CLINICAL_CHEMISTRY: QuestionBank = QuestionBank {
    slug: "clinical-chemistry",
    title: "Clinical Chemistry",
    blocks: &[
        "question: Which tube additive inhibits glycolysis in glucose specimens?\nSodium fluoride, EDTA, Sodium citrate, Clot activator",
        "question: Which enzyme is most specific for liver cell injury?\nALT, AST, LDH, CK",
        "question: Which analyte is the preferred marker of myocardial infarction?\nCardiac troponin, Myoglobin, LDH, Amylase",
        "question: HbA1c reflects average glucose over approximately how long?\n2 to 3 months, 1 week, 24 hours, 1 year",
        "question: Which electrolyte is falsely elevated by specimen hemolysis?\nPotassium, Sodium, Chloride, Bicarbonate",
        "question: What is the normal pH range of arterial blood?\n7.35 to 7.45, 7.00 to 7.10, 7.60 to 7.70, 6.80 to 7.00",
        "question: Which law underlies spectrophotometric measurement of concentration?\nBeer-Lambert law, Boyle's law, Ohm's law, Henry's law",
        "question: Elevated serum amylase and lipase most suggest which condition?\nAcute pancreatitis, Viral hepatitis, Nephrotic syndrome, Hypothyroidism",
    ],
};

pub const MICROBIOLOGY: QuestionBank = QuestionBank {
    slug: "microbiology",
    title: "Microbiology",
    blocks: &[
        "question: Gram-positive bacteria stain what color?\nPurple, Pink, Green, Colorless",
        "question: Which medium is selective and differential for gram-negative enteric bacilli?\nMacConkey agar, Blood agar, Chocolate agar, Mueller-Hinton agar",
        "question: Which test differentiates Staphylococcus from Streptococcus?\nCatalase, Oxidase, Coagulase, Indole",
        "question: Which stain is used to detect Mycobacterium tuberculosis?\nZiehl-Neelsen stain, Gram stain, Wright stain, Giemsa stain",
        "question: Which agar is standard for disk diffusion susceptibility testing?\nMueller-Hinton agar, MacConkey agar, Sabouraud agar, Thayer-Martin agar",
        "question: Which organism requires factors X and V for growth?\nHaemophilus influenzae, Escherichia coli, Staphylococcus aureus, Proteus mirabilis",
        "question: Which test identifies Staphylococcus aureus among staphylococci?\nCoagulase, Catalase, Bacitracin, Optochin",
        "question: Beta hemolysis on blood agar appears as what?\nComplete clearing around colonies, Green discoloration, No change, Black precipitate",
    ],
};

pub const URINALYSIS: QuestionBank = QuestionBank {
    slug: "urinalysis",
    title: "Urinalysis",
    blocks: &[
        "question: Which specimen is preferred for routine urinalysis?\nFirst morning specimen, Random afternoon specimen, 24-hour specimen, Postprandial specimen",
        "question: Which cast is most associated with glomerulonephritis?\nRed blood cell cast, Hyaline cast, Waxy cast, Fatty cast",
        "question: A positive nitrite reagent strip suggests what?\nBacteriuria, Glycosuria, Ketonuria, Proteinuria",
        "question: What is the normal specific gravity range of random urine?\n1.003 to 1.035, 1.000 to 1.001, 1.040 to 1.060, 0.990 to 1.000",
        "question: Which crystal is typical of ethylene glycol poisoning?\nCalcium oxalate, Uric acid, Cystine, Triple phosphate",
        "question: Ketones in urine are detected with which reagent?\nSodium nitroprusside, Glucose oxidase, Tetrabromophenol blue, Diazonium salt",
        "question: Within how long should an unpreserved urine be tested?\n2 hours, 12 hours, 24 hours, 48 hours",
    ],
};

pub const IMMUNOHEMATOLOGY: QuestionBank = QuestionBank {
    slug: "immunohematology",
    title: "Immunohematology",
    blocks: &[
        "question: Which blood group is the universal red cell donor?\nO negative, AB positive, A negative, B positive",
        "question: Which blood group is the universal plasma donor?\nAB, O, A, B",
        "question: The direct antiglobulin test detects what?\nIn vivo coating of red cells, Antibodies in serum, Platelet antibodies, Complement in plasma",
        "question: Which antibody class crosses the placenta?\nIgG, IgM, IgA, IgE",
        "question: What is the storage temperature for red blood cell units?\n1 to 6 degrees Celsius, 20 to 24 degrees Celsius, Minus 18 degrees Celsius, 10 to 15 degrees Celsius",
        "question: Platelet concentrates are stored at which temperature?\n20 to 24 degrees Celsius, 1 to 6 degrees Celsius, Minus 18 degrees Celsius, 37 degrees Celsius",
        "question: Which antigen defines Rh positive status?\nD, C, E, K",
    ],
};

pub const BANKS: &[QuestionBank] = &[
    HEMATOLOGY,
    CLINICAL_CHEMISTRY,
    MICROBIOLOGY,
    URINALYSIS,
    IMMUNOHEMATOLOGY,
];

pub fn find_bank(slug: &str) -> Option<&'static QuestionBank> {
    let slug = slug.trim();
    BANKS.iter().find(|b| b.slug.eq_ignore_ascii_case(slug))
}
