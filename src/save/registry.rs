use serde::Serialize;

/// Grouping of a save-record marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
	/// Core character attribute.
	Attribute,
	/// Skill track level.
	Skill,
	/// Purchased perk rank.
	Perk,
}

/// Character attribute markers.
pub const ATTRIBUTES: &[&str] = &[
	"attperception",
	"attstrength",
	"attfortitude",
	"attagility",
	"attintellect",
	"attbooks",
];

/// Skill track markers.
pub const SKILLS: &[&str] = &[
	"skillperceptioncombat",
	"skillperceptiongeneral",
	"skillperceptionscavenging",
	"skillstrengthcombat",
	"skillstrengthgeneral",
	"skillstrengthconstruction",
	"skillfortitudecombat",
	"skillfortitudesurvival",
	"skillfortituderecovery",
	"skillagilitycombat",
	"skillagilityathletics",
	"skillagilitystealth",
	"skillintellectcombat",
	"skillintellectinfluence",
	"skillintellectcraftsmanship",
	"skillartofmining",
	"skillautoweapons",
	"skillbatterup",
	"skillbarbrawling",
	"skillfiremansalmanac",
	"skillgreatheist",
	"skillhuntingjournal",
	"skillluckylooter",
	"skillenforcer",
	"skillneedleandthread",
	"skillnightstalker",
	"skillpistolpete",
	"skillarchery",
	"skillshotguns",
	"skillsniper",
	"skillspearhunter",
	"skillurbancombat",
	"skilltechjunkie",
	"skillwastetreasures",
];

/// Perk rank markers.
pub const PERKS: &[&str] = &[
	"perkdeadeye",
	"perkdemolitionsexpert",
	"perkjavelinmaster",
	"perklockpicking",
	"perkinfiltrator",
	"perkanimaltracker",
	"perkpenetrator",
	"perkluckylooter",
	"perktreasurehunter",
	"perksalvageoperations",
	"perkboomstick",
	"perkpummelpete",
	"perkskullcrusher",
	"perksexualtrex",
	"perkheavyarmor",
	"perkpackmule",
	"perkmasterchef",
	"perkminer69r",
	"perkmotherlode",
	"perkbrawler",
	"perkmachinegunner",
	"perkthehuntsman",
	"perkwellinsulated",
	"perklivingofftheland",
	"perkpaintolerance",
	"perkhealingfactor",
	"perkslowmetabolism",
	"perkruleonecardio",
	"perkarchery",
	"perkgunslinger",
	"perkdeepcuts",
	"perkrunandgun",
	"perkflurryofblows",
	"perklightarmor",
	"perkparkour",
	"perkhiddenstrike",
	"perkfromtheshadows",
	"perkelectrocutioner",
	"perkturrets",
	"perkbetterbarter",
	"perkdaringadventurer",
	"perkcharismaticnature",
	"perkphysician",
	"perkadvancedengineering",
	"perkgreasemonkey",
	"perkfiremansalmanacheat",
	"perkfiremansalmanacaxes",
	"perkfiremansalmanacspeed",
	"perkfiremansalmanacmolotov",
	"perkfiremansalmanacprevention",
	"perkfiremansalmanacharvest",
	"perkfiremansalmanacequipment",
	"perkfiremansalmanaccomplete",
	"perkneedleandthreadwinterwear",
	"perkneedleandthreadlegwear",
	"perkneedleandthreadfootwear",
	"perkneedleandthreaddesertwear",
	"perkneedleandthreaddusters",
	"perkneedleandthreadpuffercoats",
	"perkneedleandthreadpockets",
	"perkneedleandthreadcomplete",
	"perknightstalkerstealthdamage",
	"perknightstalkersilentnight",
	"perknightstalkerblades",
	"perknightstalkerthiefadrenaline",
	"perknightstalkerarchery",
	"perknightstalkertwilightthief",
	"perknightstalkerslumberparty",
	"perknightstalkercomplete",
	"perkluckylooterdukes",
	"perkluckylooterammunition",
	"perkluckylooterbrass",
	"perkluckylooterlead",
	"perkluckylooterbooks",
	"perkluckylooterfood",
	"perkluckylootermedical",
	"perkluckylootercomplete",
	"perkenforcerdamage",
	"perkenforcerapparel",
	"perkenforcerpunks",
	"perkenforcerintimidation",
	"perkenforcerapammo",
	"perkenforcerhpammo",
	"perkenforcercriminalpursuit",
	"perkenforcercomplete",
	"perkbatterupbighits",
	"perkbatterupgear",
	"perkbatterupslowpitch",
	"perkbatterupknockdown",
	"perkbatterupmaintenance",
	"perkbatterupbaseballbats",
	"perkbatterupmetalchain",
	"perkbatterupcomplete",
	"perkgreatheistsafes",
	"perkgreatheistgems",
	"perkgreatheisttimedcharge",
	"perkgreatheistclaimed",
	"perkgreatheistadrenalinefall",
	"perkgreatheistsprintsneak",
	"perkgreatheistmotiondetection",
	"perkgreatheistcomplete",
	"perkwastetreasureshoney",
	"perkwastetreasurescoffins",
	"perkwastetreasuresacid",
	"perkwastetreasureswater",
	"perkwastetreasuresdoors",
	"perkwastetreasurescloth",
	"perkwastetreasuressinks",
	"perkwastetreasurescomplete",
	"perkhuntingjournalbears",
	"perkhuntingjournalwolves",
	"perkhuntingjournalcoyotes",
	"perkhuntingjournalmountainlions",
	"perkhuntingjournaldeer",
	"perkhuntingjournalvultures",
	"perkhuntingjournalselfdefense",
	"perkhuntingjournalcomplete",
	"perkartofminingluckystrike",
	"perkartofminingdiamondtools",
	"perkartofminingcoffee",
	"perkartofminingblackstrap",
	"perkartofminingpallets",
	"perkartofminingavalanche",
	"perkartofmininglantern",
	"perkartofminingcomplete",
	"perkrangersarrowrecovery",
	"perkrangersexplodingbolts",
	"perkrangerscripplingshot",
	"perkrangersapammo",
	"perkrangersflamingarrows",
	"perkrangersforestguide",
	"perkrangersknockdown",
	"perkrangerscomplete",
	"perkpistolpetetakeaim",
	"perkpistolpeteswissknees",
	"perkpistolpetesteadyhand",
	"perkpistolpetemaintenance",
	"perkpistolpetehpammo",
	"perkpistolpeteapammo",
	"perkpistolpetedamage",
	"perkpistolpetecomplete",
	"perkshotgunmessiahdamage",
	"perkshotgunmessiahbreachingslugs",
	"perkshotgunmessiahlimbshot",
	"perkshotgunmessiahslugs",
	"perkshotgunmessiahmaintenance",
	"perkshotgunmessiahmagazine",
	"perkshotgunmessiahpartystarter",
	"perkshotgunmessiahcomplete",
	"perksniperdamage",
	"perksnipercripplingshot",
	"perksniperheadshot",
	"perksniperreload",
	"perksnipercontrolledbreathing",
	"perksniperapammo",
	"perksniperhpammo",
	"perksnipercomplete",
	"perkautoweaponsdamage",
	"perkautoweaponsuncontrolledburst",
	"perkautoweaponsmaintenance",
	"perkautoweaponsdrummag",
	"perkautoweaponsrecoil",
	"perkautoweaponsragdoll",
	"perkautoweaponsmachineguns",
	"perkautoweaponscomplete",
	"perkurbancombatlanding",
	"perkurbancombatcigar",
	"perkurbancombatsneaking",
	"perkurbancombatjumping",
	"perkurbancombatlandmines",
	"perkurbancombatadrenalinerush",
	"perkurbancombatroomclearing",
	"perkurbancombatcomplete",
	"perktechjunkie1damage",
	"perktechjunkie2maintenance",
	"perktechjunkie3apammo",
	"perktechjunkie4shells",
	"perktechjunkie5repulsor",
	"perktechjunkie6batoncharge",
	"perktechjunkie7hydraulics",
	"perktechjunkie8complete",
	"perkbarbrawling1basicmoves",
	"perkbarbrawling2dropabomb",
	"perkbarbrawling3killerinstinct",
	"perkbarbrawling4finishingmoves",
	"perkbarbrawling6ragemode",
	"perkbarbrawling7boozedup",
	"perkbarbrawling8complete",
	"perkspearhunter1damage",
	"perkspearhunter2maintenance",
	"perkspearhunter3steelspears",
	"perkspearhunter4strongarm",
	"perkspearhunter5rapidstrike",
	"perkspearhunter6puncturedlung",
	"perkspearhunter7quickstrike",
	"perkspearhunter8complete",
];

/// Fixed, ordered catalog of known save-record markers.
///
/// Immutable configuration data for the binary field scanner; no behavior
/// beyond iteration in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct FieldRegistry {
	/// Attribute marker names.
	pub attributes: &'static [&'static str],
	/// Skill marker names.
	pub skills: &'static [&'static str],
	/// Perk marker names.
	pub perks: &'static [&'static str],
}

impl FieldRegistry {
	/// Registry covering every marker known from observed save records.
	pub const fn standard() -> Self {
		Self {
			attributes: ATTRIBUTES,
			skills: SKILLS,
			perks: PERKS,
		}
	}

	/// Iterate every marker with its category, attributes first.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, FieldCategory)> {
		let attributes = self.attributes.iter().map(|name| (*name, FieldCategory::Attribute));
		let skills = self.skills.iter().map(|name| (*name, FieldCategory::Skill));
		let perks = self.perks.iter().map(|name| (*name, FieldCategory::Perk));
		attributes.chain(skills).chain(perks)
	}
}

impl Default for FieldRegistry {
	fn default() -> Self {
		Self::standard()
	}
}
