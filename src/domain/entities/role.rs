/// Closed vocabulary for a member's role. Free-text labels from foreign
/// sources are mapped onto it by [`Role::normalize`]; nothing outside this
/// set ever reaches a member row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ContactPi,
    Mpi,
    Pi,
    CoPi,
    ProgramManager,
    ProjectManagerCoordinator,
    ProjectCoordinator,
    Administrator,
    AdministrativeAssistant,
    Collaborator,
    Collaboration,
    Consultant,
    CoInvestigator,
    DmacLeadMember,
    DataAnalyst,
    DataCurator,
    DataManager,
    DataScientist,
    ELwaziUgandaNodeBioinformaticianDataScientist,
    HubDeputyDirector,
    MastersStudent,
    MemberAndCoChairIwg,
    MemberCollaborator,
    PhdStudent,
    PhdTrainee,
    PostDoc,
    PostgraduateStudent,
    PreDoc,
    ProjectTeamMember,
    RedcapAdministrator,
    RedcapDatabaseDeveloper,
    ResearchAssistant,
    ResearchFellow,
    Researcher,
    Sequencing,
    SiteInvestigator,
    SitePi,
    SoftwareDeveloper,
    SoftwareEngineer,
    SystemAdminDataScientist,
    SystemsAdministrator,
    TrainingAndOutreachCoordinator,
    TrainingCoordinator,
    WebDeveloper,
}

impl Role {
    /// Every role, in vocabulary order. Matching passes iterate this slice,
    /// so first-declared wins on ties.
    pub const ALL: [Role; 44] = [
        Role::ContactPi,
        Role::Mpi,
        Role::Pi,
        Role::CoPi,
        Role::ProgramManager,
        Role::ProjectManagerCoordinator,
        Role::ProjectCoordinator,
        Role::Administrator,
        Role::AdministrativeAssistant,
        Role::Collaborator,
        Role::Collaboration,
        Role::Consultant,
        Role::CoInvestigator,
        Role::DmacLeadMember,
        Role::DataAnalyst,
        Role::DataCurator,
        Role::DataManager,
        Role::DataScientist,
        Role::ELwaziUgandaNodeBioinformaticianDataScientist,
        Role::HubDeputyDirector,
        Role::MastersStudent,
        Role::MemberAndCoChairIwg,
        Role::MemberCollaborator,
        Role::PhdStudent,
        Role::PhdTrainee,
        Role::PostDoc,
        Role::PostgraduateStudent,
        Role::PreDoc,
        Role::ProjectTeamMember,
        Role::RedcapAdministrator,
        Role::RedcapDatabaseDeveloper,
        Role::ResearchAssistant,
        Role::ResearchFellow,
        Role::Researcher,
        Role::Sequencing,
        Role::SiteInvestigator,
        Role::SitePi,
        Role::SoftwareDeveloper,
        Role::SoftwareEngineer,
        Role::SystemAdminDataScientist,
        Role::SystemsAdministrator,
        Role::TrainingAndOutreachCoordinator,
        Role::TrainingCoordinator,
        Role::WebDeveloper,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Role::ContactPi => "Contact PI",
            Role::Mpi => "MPI",
            Role::Pi => "PI",
            Role::CoPi => "Co-PI",
            Role::ProgramManager => "Program Manager",
            Role::ProjectManagerCoordinator => "Project Manager/Coordinator",
            Role::ProjectCoordinator => "Project Coordinator",
            Role::Administrator => "Administrator",
            Role::AdministrativeAssistant => "Administrative Assistant",
            Role::Collaborator => "Collaborator",
            Role::Collaboration => "Collaboration",
            Role::Consultant => "Consultant",
            Role::CoInvestigator => "Co-Investigator",
            Role::DmacLeadMember => "DMAC Lead/Member",
            Role::DataAnalyst => "Data Analyst",
            Role::DataCurator => "Data curator",
            Role::DataManager => "Data Manager",
            Role::DataScientist => "Data scientist",
            Role::ELwaziUgandaNodeBioinformaticianDataScientist => {
                "eLwazi Uganda Node Bioinformatician/Data Scientist"
            }
            Role::HubDeputyDirector => "Hub Deputy Director",
            Role::MastersStudent => "Master's student",
            Role::MemberAndCoChairIwg => "Member and co-chair I-WG",
            Role::MemberCollaborator => "Member/Collaborator",
            Role::PhdStudent => "PhD Student",
            Role::PhdTrainee => "PhD Trainee",
            Role::PostDoc => "Post-Doc",
            Role::PostgraduateStudent => "Postgraduate Student",
            Role::PreDoc => "Pre-Doc",
            Role::ProjectTeamMember => "Project Team Member",
            Role::RedcapAdministrator => "REDCap Administrator",
            Role::RedcapDatabaseDeveloper => "REDCap Database Developer",
            Role::ResearchAssistant => "Research Assistant",
            Role::ResearchFellow => "Research Fellow",
            Role::Researcher => "Researcher",
            Role::Sequencing => "Sequencing",
            Role::SiteInvestigator => "Site Investigator",
            Role::SitePi => "Site PI",
            Role::SoftwareDeveloper => "Software Developer",
            Role::SoftwareEngineer => "Software Engineer",
            Role::SystemAdminDataScientist => "System Admin | Data Scientist",
            Role::SystemsAdministrator => "Systems Administrator",
            Role::TrainingAndOutreachCoordinator => "Training And Outreach Coordinator",
            Role::TrainingCoordinator => "Training Coordinator",
            Role::WebDeveloper => "Web Developer",
        }
    }

    /// Maps an arbitrary free-text label onto the vocabulary. Total: matching
    /// passes run in descending strictness and the generic `Researcher` is
    /// the end of the line, so heterogeneous role spellings degrade to a safe
    /// default instead of dropping the record.
    pub fn normalize(label: &str) -> Role {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Role::Researcher;
        }

        if let Some(role) = Role::ALL.iter().find(|role| role.label() == label) {
            return *role;
        }

        if let Some(role) = Role::ALL
            .iter()
            .find(|role| role.label().eq_ignore_ascii_case(trimmed))
        {
            return *role;
        }

        let simplified = simplify(trimmed);
        if let Some(role) = Role::ALL
            .iter()
            .find(|role| simplify(role.label()) == simplified)
        {
            return *role;
        }

        let lowered = trimmed.to_lowercase();
        if let Some(role) = Role::ALL.iter().find(|role| {
            let candidate = role.label().to_lowercase();
            lowered.contains(&candidate) || candidate.contains(&lowered)
        }) {
            return *role;
        }

        Role::Researcher
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Researcher
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercase and strip everything outside `[a-z0-9]`, so "Co-PI", "co pi"
/// and "CoPI" all compare equal.
fn simplify(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
